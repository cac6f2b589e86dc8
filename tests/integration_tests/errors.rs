use crate::common::test_context::TestContext;
use paystack_rust::ErrorKind;

#[tokio::test]
async fn invalid_secret_key_is_an_authentication_error() {
    let ctx = TestContext::start().await;
    ctx.respond_to_any_key_with("GET", "/balance", 401, fixture!("errors/invalid_key"))
        .await;

    let err = ctx
        .client_with_secret_key("sk_test_definitely-not-a-real-key")
        .transfer_control
        .check_balance()
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Authentication);
    let api_error = err.as_api_error().unwrap();
    assert_eq!(api_error.status_code, 401);
    assert!(!api_error.next_step().is_empty());
}

#[tokio::test]
async fn blank_identifiers_never_reach_paystack() {
    let ctx = TestContext::start().await;

    let err = ctx.client.transfers.verify("   ").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.as_api_error().is_none());
}

#[cfg(not(feature = "acceptance-tests"))]
#[tokio::test]
async fn unknown_transfer_is_not_found() {
    let ctx = TestContext::start().await;
    ctx.respond_with(
        "GET",
        "/transfer/TRF_doesnotexist",
        404,
        fixture!("errors/transfer_not_found"),
    )
    .await;

    let err = ctx
        .client
        .transfers
        .fetch("TRF_doesnotexist")
        .await
        .unwrap_err();

    assert!(err.is_not_found_error());
    assert_eq!(
        err.to_string(),
        "paystack api error (status 404): Transfer not found [code: invalid_params] [type: validation_error] [next step: Ensure that you're passing a transfer code or ID that exists on this integration]"
    );
}
