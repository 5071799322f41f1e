//! Validates an incoming order and prints the report under the external
//! (JSON-style) field names.
//!
//! Run with `cargo run --example create_order`. The `tracing` feature only
//! emits events; install a subscriber to see them.

use valid_rail::prelude::*;

#[derive(Debug, Default)]
struct CreateOrder {
    reference: String,
    currency: String,
    tags: Vec<String>,
    items: Vec<OrderItem>,
    payment: Option<Payment>,
}

#[derive(Debug, Default)]
struct OrderItem {
    name: String,
    quantity: i32,
}

#[derive(Debug)]
struct Payment {
    method: String,
    transaction_id: String,
}

/// Currency accepted by the storefront handling the request.
struct StoreCurrency(&'static str);

fn matches_store_currency(ctx: &Context, value: &str) -> Option<Violation> {
    let expected = ctx.value::<StoreCurrency>()?.0;
    (value != expected).then(|| Violation::new("CURRENCY_MISMATCH", format!("currency must be {expected}")))
}

impl Validatable for Payment {
    fn validate(&self, ctx: &Context) -> DelegateResult {
        Ok(valid_struct!(ctx,
            field("Method", &self.method, &[&required(), &one_of(["card", "bank_transfer"])]),
            field("TransactionID", &self.transaction_id, &[&required(), &has_prefix("txn_")]),
        )?)
    }
}

fn validate_order(ctx: &Context, order: &CreateOrder) -> ValidationResult {
    valid_struct!(ctx,
        field("Payment", &order.payment, &[&required()]),
        nested("Payment", Nested::optional(order.payment.as_ref())),
        field("Reference", &order.reference, &[&required(), &max_length(16)]),
        field("Currency", order.currency.as_str(), &[&required(), &matches_store_currency]),
        field("Tags", &order.tags, &[&required()]),
        slice("Items", &order.items, |ctx, _, item| {
            valid_struct!(ctx,
                field("Name", &item.name, &[&required()]),
                field("Quantity", &item.quantity, &[&between(1, 99)]),
            )
        }),
    )
}

fn main() {
    let ctx = Context::background().with_value(StoreCurrency("EUR"));
    let mapping = PathMapping::new()
        .map("Payment.TransactionID", "payment.transactionId")
        .map("Payment.*", "payment.*")
        .map("Payment", "payment")
        .map("Reference", "reference")
        .map("Currency", "currency")
        .map("Tags", "tags")
        .map("Items.*.Name", "items[*].name")
        .map("Items.*.Quantity", "items[*].quantity");

    let order = CreateOrder {
        reference: "REF-2024-000000001".into(),
        currency: "USD".into(),
        items: vec![
            OrderItem { name: "Widget".into(), quantity: 2 },
            OrderItem { name: String::new(), quantity: 120 },
        ],
        payment: Some(Payment { method: "cash".into(), transaction_id: "42".into() }),
        ..Default::default()
    };

    match validate_order(&ctx, &order).rename_paths(&mapping) {
        Ok(()) => println!("order accepted"),
        Err(err) => {
            println!("{}", err.report().pretty());
            println!();
            println!("{}", err.report_with(&ReportConfig::paths_only()));
        },
    }
}
