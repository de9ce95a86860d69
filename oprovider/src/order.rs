//! Order-history domain values as the provider reports them.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDate;

use crate::ProviderError;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Order {
    pub order_number: String,
    pub order_placed_date: Option<NaiveDate>,
    pub grand_total: Option<f64>,
    pub subtotal: Option<f64>,
    pub shipping_total: Option<f64>,
    pub estimated_tax: Option<f64>,
    pub total_before_tax: Option<f64>,
    pub refund_total: Option<f64>,
    pub promotion_applied: Option<f64>,
    pub coupon_savings: Option<f64>,
    pub subscription_discount: Option<f64>,
    pub multibuy_discount: Option<f64>,
    pub amazon_discount: Option<f64>,
    pub reward_points: Option<u64>,
    pub gift_card: Option<f64>,
    pub payment_method: Option<String>,
    pub payment_method_last_4: Option<String>,
    pub recipient: Option<Recipient>,
    pub items: Vec<Item>,
}

impl Order {
    pub fn new(order_number: impl Into<String>) -> Self {
        Self {
            order_number: order_number.into(),
            ..Self::default()
        }
    }

    pub fn with_placed_date(mut self, date: NaiveDate) -> Self {
        self.order_placed_date = Some(date);
        self
    }

    pub fn with_grand_total(mut self, total: f64) -> Self {
        self.grand_total = Some(total);
        self
    }

    pub fn with_recipient(mut self, recipient: Recipient) -> Self {
        self.recipient = Some(recipient);
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Recipient {
    pub name: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seller {
    pub name: String,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub title: String,
    pub price: Option<f64>,
    pub quantity: u32,
    pub link: Option<String>,
    pub seller: Option<Seller>,
    pub condition: Option<String>,
}

impl Item {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            price: None,
            quantity: 1,
            link: None,
            seller: None,
            condition: None,
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_seller(mut self, name: impl Into<String>) -> Self {
        self.seller = Some(Seller {
            name: name.into(),
            link: None,
        });
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }
}

/// Relative time windows the order-history page understands.
///
/// ```rust
/// use oprovider::TimeFilter;
///
/// let filter: TimeFilter = "months-3".parse().expect("valid filter");
/// assert_eq!(filter, TimeFilter::Months(3));
/// assert_eq!(filter.to_string(), "months-3");
/// assert!("fortnight".parse::<TimeFilter>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFilter {
    Last30Days,
    Months(u32),
}

impl Display for TimeFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Last30Days => f.write_str("last30"),
            Self::Months(months) => write!(f, "months-{months}"),
        }
    }
}

impl FromStr for TimeFilter {
    type Err = ProviderError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("last30") {
            return Ok(Self::Last30Days);
        }

        value
            .strip_prefix("months-")
            .and_then(|months| months.parse::<u32>().ok())
            .filter(|months| *months > 0)
            .map(Self::Months)
            .ok_or_else(|| {
                ProviderError::invalid_request(format!(
                    "unsupported time filter '{value}': expected 'last30' or 'months-N'"
                ))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSelection {
    Year(i32),
    Filter(TimeFilter),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderQuery {
    pub selection: TimeSelection,
    pub full_details: bool,
}

impl OrderQuery {
    pub fn year(year: i32) -> Self {
        Self {
            selection: TimeSelection::Year(year),
            full_details: false,
        }
    }

    pub fn filter(filter: TimeFilter) -> Self {
        Self {
            selection: TimeSelection::Filter(filter),
            full_details: false,
        }
    }

    pub fn with_full_details(mut self, full_details: bool) -> Self {
        self.full_details = full_details;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProviderErrorKind;

    #[test]
    fn time_filter_parses_known_tokens() {
        assert_eq!("last30".parse::<TimeFilter>(), Ok(TimeFilter::Last30Days));
        assert_eq!("LAST30".parse::<TimeFilter>(), Ok(TimeFilter::Last30Days));
        assert_eq!("months-6".parse::<TimeFilter>(), Ok(TimeFilter::Months(6)));
    }

    #[test]
    fn time_filter_rejects_malformed_tokens() {
        for token in ["", "months-", "months-0", "months-x", "year-2024"] {
            let error = token.parse::<TimeFilter>().expect_err("token must be rejected");
            assert_eq!(error.kind, ProviderErrorKind::InvalidRequest);
        }
    }

    #[test]
    fn order_builders_fill_expected_fields() {
        let order = Order::new("111-0000000-0000001")
            .with_grand_total(19.99)
            .with_item(Item::new("USB cable").with_quantity(2).with_seller("Cables Inc"));

        assert_eq!(order.grand_total, Some(19.99));
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(
            order.items[0].seller.as_ref().map(|seller| seller.name.as_str()),
            Some("Cables Inc")
        );
    }
}
