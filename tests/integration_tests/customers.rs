use crate::common::test_context::TestContext;
use paystack_rust::apis::customers::CreateCustomerRequestBuilder;

#[tokio::test]
async fn create_then_fetch_customer() {
    let ctx = TestContext::start().await;
    ctx.respond_with("POST", "/customer", 200, fixture!("customers/fetch_customer"))
        .await;
    ctx.respond_with(
        "GET",
        "/customer/CUS_c6wqvwmvwopw4ms",
        200,
        fixture!("customers/fetch_customer"),
    )
    .await;

    let request = CreateCustomerRequestBuilder::default()
        .email("rhodes@email.com")
        .build()
        .unwrap();
    let created = ctx
        .client
        .customers
        .create(&request)
        .await
        .unwrap()
        .into_data()
        .unwrap();

    let fetched = ctx
        .client
        .customers
        .fetch(&created.customer_code)
        .await
        .unwrap()
        .into_data()
        .unwrap();

    assert_eq!(created, fetched);
    assert_eq!(fetched.customer_code, "CUS_c6wqvwmvwopw4ms");
}
