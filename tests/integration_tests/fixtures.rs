use crate::common::fixtures::assert_round_trips;
use paystack_rust::{
    apis::{
        apple_pay::ApplePayDomains,
        bulk_charges::{BulkCharge, ChargeStatus as BulkChargeStatus},
        charges::{Charge, ChargeStatus},
        common::{Bearer, Currency, RiskAction},
        customers::Customer,
        dedicated_virtual_accounts::DedicatedAccount,
        disputes::{Dispute, DisputeStatus},
        integration::PaymentSessionTimeout,
        miscellaneous::{Bank, Country},
        payment_pages::{Page, PageType},
        payment_requests::{PaymentRequest, PaymentRequestStatus},
        plans::{Interval, Plan},
        products::Product,
        refunds::{Refund, RefundStatus},
        settlements::{Settlement, SettlementStatus},
        subaccounts::Subaccount,
        subscriptions::{Subscription, SubscriptionStatus},
        terminals::Terminal,
        transaction_splits::{Split, SplitType},
        transactions::{Transaction, TransactionStatus},
        transfer_control::Balance,
        transfer_recipients::{Recipient, RecipientType},
        transfers::{Transfer, TransferStatus},
        verification::{CardBin, ResolvedAccount},
        virtual_terminals::VirtualTerminal,
    },
    ApiError, Response,
};

#[test]
fn list_banks() {
    let res: Response<Vec<Bank>> = assert_round_trips(fixture!("miscellaneous/list_banks"));

    let meta = res.meta.clone().unwrap();
    assert_eq!(meta.next.as_deref(), Some("YmFuazoxNjk="));
    assert_eq!(meta.per_page, Some(2));
    let banks = res.into_data().unwrap();
    assert_eq!(banks.len(), 2);
    assert_eq!(banks[1].code, "404");
    assert_eq!(banks[1].bank_type.as_deref(), Some("nuban"));
}

#[test]
fn list_countries() {
    let res: Response<Vec<Country>> =
        assert_round_trips(fixture!("miscellaneous/list_countries"));

    let countries = res.into_data().unwrap();
    assert_eq!(countries[0].iso_code, "NG");
    assert!(countries[0].relationships.is_some());
}

#[test]
fn fetch_customer() {
    let res: Response<Customer> = assert_round_trips(fixture!("customers/fetch_customer"));

    let customer = res.into_data().unwrap();
    assert_eq!(customer.customer_code, "CUS_c6wqvwmvwopw4ms");
    assert_eq!(customer.risk_action, Some(RiskAction::Default));
    assert_eq!(
        customer.authorizations[0].authorization_code.as_deref(),
        Some("AUTH_ekk8t49ogj")
    );
}

#[test]
fn initiate_transfer() {
    let res: Response<Transfer> = assert_round_trips(fixture!("transfers/initiate_transfer"));

    assert_eq!(res.message, "Transfer requires OTP to continue");
    let transfer = res.into_data().unwrap();
    assert_eq!(transfer.status, TransferStatus::Otp);
    assert_eq!(transfer.recipient, Some(serde_json::json!(28871802)));
}

#[test]
fn list_transfers() {
    let res: Response<Vec<Transfer>> = assert_round_trips(fixture!("transfers/list_transfers"));

    assert_eq!(res.meta.as_ref().and_then(|m| m.page_count), Some(1));
    let transfers = res.into_data().unwrap();
    assert_eq!(transfers[0].status, TransferStatus::Success);
    assert_eq!(
        transfers[0].recipient.as_ref().unwrap()["recipient_code"],
        "RCP_2tn9clt23s7qr28"
    );
}

#[test]
fn create_recipient() {
    let res: Response<Recipient> =
        assert_round_trips(fixture!("transfer_recipients/create_recipient"));

    let recipient = res.into_data().unwrap();
    assert_eq!(recipient.recipient_type, RecipientType::Nuban);
    assert_eq!(
        recipient.details.unwrap().bank_name.as_deref(),
        Some("Guaranty Trust Bank")
    );
}

#[test]
fn fetch_refund() {
    let res: Response<Refund> = assert_round_trips(fixture!("refunds/fetch_refund"));

    let refund = res.into_data().unwrap();
    assert_eq!(refund.status, RefundStatus::Processed);
    assert_eq!(refund.deducted_amount, Some(10000));
    assert_eq!(refund.dispute, None);
}

#[test]
fn list_plans() {
    let res: Response<Vec<Plan>> = assert_round_trips(fixture!("plans/list_plans"));

    let plans = res.into_data().unwrap();
    assert_eq!(plans[0].interval, Interval::Monthly);
    assert_eq!(plans[0].currency, Currency::Ngn);
    assert_eq!(plans[0].invoice_limit, None);
}

#[test]
fn check_balance() {
    let res: Response<Vec<Balance>> =
        assert_round_trips(fixture!("transfer_control/check_balance"));

    let balances = res.into_data().unwrap();
    assert_eq!(balances.len(), 2);
    assert_eq!(balances[0].balance, 1700000);
}

#[test]
fn resolve_account() {
    let res: Response<ResolvedAccount> =
        assert_round_trips(fixture!("verification/resolve_account"));

    assert_eq!(res.into_data().unwrap().account_name, "Doe Jane Loren");
}

#[test]
fn resolve_card_bin() {
    let res: Response<CardBin> = assert_round_trips(fixture!("verification/resolve_card_bin"));

    let bin = res.into_data().unwrap();
    assert_eq!(bin.brand.as_deref(), Some("Mastercard"));
    assert_eq!(bin.linked_bank_id, Some(9));
}

#[test]
fn verify_transaction() {
    let res: Response<Transaction> =
        assert_round_trips(fixture!("transactions/verify_transaction"));

    let transaction = res.into_data().unwrap();
    assert_eq!(transaction.status, TransactionStatus::Success);
    assert_eq!(transaction.metadata, Some(serde_json::json!("")));
    assert_eq!(transaction.customer.unwrap().email, "demo@test.com");
}

#[test]
fn fetch_terminal() {
    let res: Response<Terminal> = assert_round_trips(fixture!("terminals/fetch_terminal"));

    let terminal = res.into_data().unwrap();
    assert_eq!(terminal.terminal_id, "2232WE17");
    assert_eq!(terminal.device_make, None);
}

#[test]
fn fetch_virtual_terminal() {
    let res: Response<VirtualTerminal> =
        assert_round_trips(fixture!("virtual_terminals/fetch_virtual_terminal"));

    let terminal = res.into_data().unwrap();
    assert_eq!(terminal.code, "VT_L0TKDMPT");
    assert_eq!(terminal.currency, Some(Currency::Ngn));
    assert_eq!(
        terminal.destinations[0].destination_type.as_deref(),
        Some("whatsapp")
    );
}

#[test]
fn fetch_dedicated_account() {
    let res: Response<DedicatedAccount> =
        assert_round_trips(fixture!("dedicated_virtual_accounts/fetch_dedicated_account"));

    let account = res.into_data().unwrap();
    assert_eq!(account.account_number, "9930000737");
    assert_eq!(account.bank.unwrap().slug.as_deref(), Some("wema-bank"));
    assert_eq!(account.assignment.unwrap().expired, Some(false));
    assert_eq!(account.customer.unwrap().customer_code, "CUS_x3od6zexvzye8y0");
}

#[test]
fn list_settlements() {
    let res: Response<Vec<Settlement>> =
        assert_round_trips(fixture!("settlements/list_settlements"));

    let settlements = res.into_data().unwrap();
    assert_eq!(settlements[0].status, SettlementStatus::Success);
    assert_eq!(settlements[0].total_fees, Some(6000));
    assert_eq!(settlements[1].currency, Currency::Ghs);
    assert_eq!(settlements[1].deductions, Some(-1500));
}

#[test]
fn fetch_split() {
    let res: Response<Split> = assert_round_trips(fixture!("transaction_splits/fetch_split"));

    let split = res.into_data().unwrap();
    assert_eq!(split.split_type, SplitType::Percentage);
    assert_eq!(split.bearer_type, Some(Bearer::Subaccount));
    assert_eq!(split.subaccounts[0].share, 20);
    assert_eq!(
        split.subaccounts[0].subaccount.subaccount_code,
        "ACCT_6uujpqtzmnufzkw"
    );
}

#[test]
fn fetch_subscription() {
    let res: Response<Subscription> =
        assert_round_trips(fixture!("subscriptions/fetch_subscription"));

    let subscription = res.into_data().unwrap();
    assert_eq!(subscription.status, SubscriptionStatus::NonRenewing);
    assert_eq!(subscription.email_token.as_deref(), Some("d7gofp6yppn3qz7"));
    assert_eq!(
        subscription.plan.unwrap()["plan_code"],
        "PLN_gx2wn530m0i3w3m"
    );
}

#[test]
fn fetch_page() {
    let res: Response<Page> = assert_round_trips(fixture!("payment_pages/fetch_page"));

    let page = res.into_data().unwrap();
    assert_eq!(page.slug, "5nApBwZkvY");
    assert_eq!(page.page_type, Some(PageType::Payment));
    assert_eq!(page.plan, None);
    assert_eq!(
        page.metadata.unwrap()["custom_fields"][0]["variable_name"],
        "guests"
    );
}

#[test]
fn fetch_payment_request() {
    let res: Response<PaymentRequest> =
        assert_round_trips(fixture!("payment_requests/fetch_payment_request"));

    let request = res.into_data().unwrap();
    assert_eq!(request.status, PaymentRequestStatus::Pending);
    assert_eq!(request.line_items.len(), 2);
    assert_eq!(request.line_items[0].quantity, None);
    assert_eq!(request.tax[0].amount, 2000);
    assert_eq!(request.paid_at, None);
}

#[test]
fn fetch_bulk_charges() {
    let res: Response<Vec<BulkCharge>> =
        assert_round_trips(fixture!("bulk_charges/fetch_charges"));

    let charges = res.into_data().unwrap();
    assert_eq!(charges[0].status, BulkChargeStatus::Success);
    assert_eq!(charges[0].bulkcharge, Some(18));
    assert_eq!(
        charges[0].authorization.as_ref().unwrap().last4.as_deref(),
        Some("1381")
    );
    assert_eq!(charges[1].status, BulkChargeStatus::Unknown);
    assert_eq!(charges[1].customer, None);
}

#[test]
fn create_charge_send_pin() {
    let res: Response<Charge> = assert_round_trips(fixture!("charges/create_charge_send_pin"));

    let charge = res.into_data().unwrap();
    assert_eq!(charge.status, ChargeStatus::SendPin);
    assert_eq!(charge.reference, "5bwib5v6anhe9xa");
    assert_eq!(charge.id, None);
}

#[test]
fn fetch_dispute() {
    let res: Response<Dispute> = assert_round_trips(fixture!("disputes/fetch_dispute"));

    let dispute = res.into_data().unwrap();
    assert_eq!(dispute.status, DisputeStatus::AwaitingMerchantFeedback);
    assert_eq!(dispute.resolution, None);
    assert_eq!(dispute.customer.unwrap().risk_action, Some(RiskAction::Allow));
    assert_eq!(dispute.history.len(), 1);
    assert!(dispute.due_at.is_some());
}

#[test]
fn fetch_subaccount() {
    let res: Response<Subaccount> = assert_round_trips(fixture!("subaccounts/fetch_subaccount"));

    let subaccount = res.into_data().unwrap();
    assert_eq!(subaccount.subaccount_code, "ACCT_4hl4xenwpjy5wb");
    assert_eq!(subaccount.percentage_charge, Some(18.2));
    assert_eq!(subaccount.settlement_schedule.as_deref(), Some("AUTO"));
}

#[test]
fn list_products() {
    let res: Response<Vec<Product>> = assert_round_trips(fixture!("products/list_products"));

    assert_eq!(res.meta.as_ref().and_then(|m| m.total), Some(1));
    let products = res.into_data().unwrap();
    assert_eq!(products[0].price, 20000);
    assert_eq!(products[0].quantity_sold, None);
    assert_eq!(products[0].in_stock, Some(true));
}

#[test]
fn list_apple_pay_domains() {
    let res: Response<ApplePayDomains> = assert_round_trips(fixture!("apple_pay/list_domains"));

    assert_eq!(
        res.into_data().unwrap().domain_names,
        vec!["example.com", "shop.example.com"]
    );
}

#[test]
fn fetch_payment_session_timeout() {
    let res: Response<PaymentSessionTimeout> =
        assert_round_trips(fixture!("integration/fetch_timeout"));

    assert_eq!(res.into_data().unwrap().payment_session_timeout, 30);
}

#[test]
fn unknown_statuses_do_not_break_decoding() {
    let raw = fixture!("transfers/list_transfers").replacen("\"success\"", "\"on_hold\"", 1);

    let res: Response<Vec<Transfer>> = assert_round_trips(&raw);

    assert_eq!(res.into_data().unwrap()[0].status, TransferStatus::Unknown);
}

#[test]
fn error_bodies() {
    let err = ApiError::from_response_body(401, fixture!("errors/invalid_key").as_bytes());

    assert!(err.is_authentication_error());
    assert_eq!(err.code.as_deref(), Some("invalid_Key"));
    assert_eq!(
        err.next_step(),
        "Ensure that you provide the correct authorization key for the request"
    );

    let err = ApiError::from_response_body(404, fixture!("errors/transfer_not_found").as_bytes());

    assert!(err.is_not_found_error());
    assert_eq!(err.message, "Transfer not found");
}
