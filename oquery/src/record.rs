//! Stable output shapes for orders and line items.
//!
//! Optional values are omitted from serialized output rather than written as
//! `null`, and money is rendered as the shortest decimal string that reads
//! back to the same amount.
//!
//! ```rust
//! use oprovider::Order;
//! use oquery::OrderRecord;
//!
//! let record = OrderRecord::from(&Order::new("111-2223334-5556667").with_grand_total(42.5));
//! assert_eq!(record.grand_total.as_deref(), Some("42.5"));
//! assert!(record.subtotal.is_none());
//! ```

use oprovider::{Item, Order, Recipient};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRecord {
    pub order_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_placed_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grand_total: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_total: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_tax: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_before_tax: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_total: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_applied: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_savings: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_discount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multibuy_discount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amazon_discount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward_points: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_card: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_last_4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<RecipientRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ItemRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipientRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRecord {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(rename = "seller", skip_serializing_if = "Option::is_none")]
    pub seller_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

fn money(value: Option<f64>) -> Option<String> {
    value.map(|amount| amount.to_string())
}

impl From<&Order> for OrderRecord {
    fn from(order: &Order) -> Self {
        Self {
            order_number: order.order_number.clone(),
            order_placed_date: order.order_placed_date.map(|date| date.to_string()),
            grand_total: money(order.grand_total),
            subtotal: money(order.subtotal),
            shipping_total: money(order.shipping_total),
            estimated_tax: money(order.estimated_tax),
            total_before_tax: money(order.total_before_tax),
            refund_total: money(order.refund_total),
            promotion_applied: money(order.promotion_applied),
            coupon_savings: money(order.coupon_savings),
            subscription_discount: money(order.subscription_discount),
            multibuy_discount: money(order.multibuy_discount),
            amazon_discount: money(order.amazon_discount),
            reward_points: order.reward_points.map(|points| points.to_string()),
            gift_card: money(order.gift_card),
            payment_method: order.payment_method.clone(),
            payment_method_last_4: order.payment_method_last_4.clone(),
            recipient: order.recipient.as_ref().and_then(RecipientRecord::from_recipient),
            items: order.items.iter().map(ItemRecord::from).collect(),
        }
    }
}

impl RecipientRecord {
    /// `None` when the provider knew neither the name nor the address.
    fn from_recipient(recipient: &Recipient) -> Option<Self> {
        if recipient.name.is_none() && recipient.address.is_none() {
            return None;
        }

        Some(Self {
            name: recipient.name.clone(),
            address: recipient.address.clone(),
        })
    }
}

impl From<&Item> for ItemRecord {
    fn from(item: &Item) -> Self {
        Self {
            title: item.title.clone(),
            price: money(item.price),
            quantity: item.quantity,
            link: item.link.clone(),
            seller_name: item.seller.as_ref().map(|seller| seller.name.clone()),
            condition: item.condition.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use oprovider::{Item, Order, Recipient};
    use serde_json::{Value, json};

    use super::*;

    fn keys(value: &Value) -> Vec<String> {
        value
            .as_object()
            .map(|object| object.keys().cloned().collect())
            .unwrap_or_default()
    }

    #[test]
    fn minimal_order_serializes_without_optional_keys() {
        let record = OrderRecord::from(&Order::new("111-0000000-0000001"));
        let value = serde_json::to_value(&record).expect("record should serialize");

        assert_eq!(value, json!({ "order_number": "111-0000000-0000001" }));
    }

    #[test]
    fn fully_populated_order_serializes_every_field_as_string() {
        let order = Order {
            order_number: "111-9999999-9999999".to_string(),
            order_placed_date: NaiveDate::from_ymd_opt(2024, 3, 15),
            grand_total: Some(107.5),
            subtotal: Some(99.99),
            shipping_total: Some(0.0),
            estimated_tax: Some(7.51),
            total_before_tax: Some(99.99),
            refund_total: Some(5.0),
            promotion_applied: Some(2.0),
            coupon_savings: Some(1.25),
            subscription_discount: Some(3.0),
            multibuy_discount: Some(4.0),
            amazon_discount: Some(0.5),
            reward_points: Some(120),
            gift_card: Some(10.0),
            payment_method: Some("Visa".to_string()),
            payment_method_last_4: Some("4242".to_string()),
            recipient: Some(Recipient {
                name: Some("Ada Lovelace".to_string()),
                address: Some("12 St James's Square, London".to_string()),
            }),
            items: vec![
                Item::new("Wireless Headphones")
                    .with_price(89.99)
                    .with_quantity(2)
                    .with_link("https://www.amazon.com/dp/B000000001")
                    .with_seller("Audio Direct")
                    .with_condition("New"),
            ],
        };

        let value = serde_json::to_value(OrderRecord::from(&order)).expect("should serialize");

        let expected_scalars = [
            ("order_placed_date", "2024-03-15"),
            ("grand_total", "107.5"),
            ("subtotal", "99.99"),
            ("shipping_total", "0"),
            ("estimated_tax", "7.51"),
            ("total_before_tax", "99.99"),
            ("refund_total", "5"),
            ("promotion_applied", "2"),
            ("coupon_savings", "1.25"),
            ("subscription_discount", "3"),
            ("multibuy_discount", "4"),
            ("amazon_discount", "0.5"),
            ("reward_points", "120"),
            ("gift_card", "10"),
            ("payment_method", "Visa"),
            ("payment_method_last_4", "4242"),
        ];
        for (key, expected) in expected_scalars {
            assert_eq!(value[key], Value::String(expected.to_string()), "{key}");
        }

        assert_eq!(keys(&value).len(), expected_scalars.len() + 3);
        assert_eq!(value["recipient"]["name"], "Ada Lovelace");
        assert_eq!(
            value["items"][0],
            json!({
                "title": "Wireless Headphones",
                "price": "89.99",
                "quantity": 2,
                "link": "https://www.amazon.com/dp/B000000001",
                "seller": "Audio Direct",
                "condition": "New"
            })
        );
    }

    #[test]
    fn sub_cent_amounts_are_not_rounded() {
        let order = Order::new("111-2")
            .with_grand_total(19.999)
            .with_item(Item::new("Bulk screws").with_price(0.004));

        let record = OrderRecord::from(&order);

        assert_eq!(record.grand_total.as_deref(), Some("19.999"));
        assert_eq!(record.items[0].price.as_deref(), Some("0.004"));
    }

    #[test]
    fn empty_recipient_is_dropped_and_item_order_is_kept() {
        let order = Order::new("111-1")
            .with_recipient(Recipient::default())
            .with_item(Item::new("first"))
            .with_item(Item::new("second"));

        let record = OrderRecord::from(&order);

        assert!(record.recipient.is_none());
        let titles: Vec<_> = record.items.iter().map(|item| item.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second"]);

        let value = serde_json::to_value(&record.items[0]).expect("item should serialize");
        assert_eq!(value, json!({ "title": "first", "quantity": 1 }));
    }
}
