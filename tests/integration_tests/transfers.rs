use crate::common::test_context::TestContext;
use paystack_rust::apis::{
    common::Currency,
    transfer_recipients::{CreateRecipientRequestBuilder, RecipientType},
    transfers::{
        InitiateTransferRequestBuilder, ListTransfersRequest, TransferSource, TransferStatus,
    },
};

#[tokio::test]
async fn pay_a_new_recipient() {
    let ctx = TestContext::start().await;
    ctx.respond_with(
        "POST",
        "/transferrecipient",
        200,
        fixture!("transfer_recipients/create_recipient"),
    )
    .await;
    ctx.respond_with("POST", "/transfer", 200, fixture!("transfers/initiate_transfer"))
        .await;

    // Create the recipient first
    let recipient = ctx
        .client
        .transfer_recipients
        .create(
            &CreateRecipientRequestBuilder::default()
                .recipient_type(RecipientType::Nuban)
                .name("Tolu Robert")
                .account_number("01000000010")
                .bank_code("058")
                .currency(Currency::Ngn)
                .build()
                .unwrap(),
        )
        .await
        .unwrap()
        .into_data()
        .unwrap();

    // Then send money to it
    let transfer = ctx
        .client
        .transfers
        .initiate(
            &InitiateTransferRequestBuilder::default()
                .source(TransferSource::Balance)
                .amount(37800)
                .recipient(recipient.recipient_code)
                .reason("Calm down")
                .reference("your-unique-reference")
                .build()
                .unwrap(),
        )
        .await
        .unwrap()
        .into_data()
        .unwrap();

    assert_eq!(transfer.status, TransferStatus::Otp);
    assert_eq!(transfer.transfer_code, "TRF_1ptvuv321ahaa7q");
}

#[tokio::test]
async fn list_transfers_with_pagination() {
    let ctx = TestContext::start().await;
    ctx.respond_with("GET", "/transfer", 200, fixture!("transfers/list_transfers"))
        .await;

    let res = ctx
        .client
        .transfers
        .list(&ListTransfersRequest::default())
        .await
        .unwrap();

    let meta = res.meta.clone().unwrap();
    assert_eq!(meta.total, Some(1));
    assert_eq!(meta.per_page, Some(50));
    assert_eq!(res.into_data().unwrap().len(), 1);
}
