use crate::common::test_context::TestContext;
use paystack_rust::apis::{common::Currency, miscellaneous::ListBanksRequestBuilder};

#[tokio::test]
async fn list_banks() {
    let ctx = TestContext::start().await;
    ctx.respond_with("GET", "/bank", 200, fixture!("miscellaneous/list_banks"))
        .await;

    let request = ListBanksRequestBuilder::default()
        .country("nigeria")
        .per_page(2)
        .build()
        .unwrap();
    let res = ctx.client.miscellaneous.list_banks(&request).await.unwrap();

    assert!(res.status);
    let banks = res.into_data().unwrap();
    assert!(!banks.is_empty());
    assert!(banks
        .iter()
        .all(|bank| bank.currency.is_none() || bank.currency == Some(Currency::Ngn)));
}

#[tokio::test]
async fn list_countries() {
    let ctx = TestContext::start().await;
    ctx.respond_with("GET", "/country", 200, fixture!("miscellaneous/list_countries"))
        .await;

    let countries = ctx
        .client
        .miscellaneous
        .list_countries()
        .await
        .unwrap()
        .into_data()
        .unwrap();

    assert!(countries.iter().any(|c| c.iso_code == "NG"));
}
