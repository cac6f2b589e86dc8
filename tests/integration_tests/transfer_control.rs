use crate::common::test_context::TestContext;

#[tokio::test]
async fn check_balance() {
    let ctx = TestContext::start().await;
    ctx.respond_with("GET", "/balance", 200, fixture!("transfer_control/check_balance"))
        .await;

    let res = ctx.client.transfer_control.check_balance().await.unwrap();

    assert!(res.status);
    assert!(!res.into_data().unwrap().is_empty());
}
