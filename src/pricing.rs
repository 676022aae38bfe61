//! Subscription plans and their pricing.
//!
//! All amounts are in paise (1/100 rupee).

use std::fmt;

use serde::Serialize;

/// Billing cycle for a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    Monthly,
    Quarterly,
    Yearly,
}

impl BillingPeriod {
    pub const ALL: [BillingPeriod; 3] = [BillingPeriod::Monthly, BillingPeriod::Quarterly, BillingPeriod::Yearly];

    /// Number of months billed per period.
    pub fn months(&self) -> u32 {
        match self {
            BillingPeriod::Monthly => 1,
            BillingPeriod::Quarterly => 3,
            BillingPeriod::Yearly => 12,
        }
    }

    /// Unit shown after a price, as in "₹9.99 / month".
    pub fn unit(&self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "month",
            BillingPeriod::Quarterly => "quarter",
            BillingPeriod::Yearly => "year",
        }
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BillingPeriod::Monthly => write!(f, "Monthly"),
            BillingPeriod::Quarterly => write!(f, "Quarterly"),
            BillingPeriod::Yearly => write!(f, "Yearly"),
        }
    }
}

/// Price of a plan for each billing period, in paise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanPrice {
    pub monthly: u32,
    pub quarterly: u32,
    pub yearly: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    pub price: PlanPrice,
    pub description: &'static str,
    pub features: &'static [&'static str],
    /// Shown as the most popular plan.
    pub highlight: bool,
}

impl Plan {
    pub fn price(&self, period: BillingPeriod) -> u32 {
        match period {
            BillingPeriod::Monthly => self.price.monthly,
            BillingPeriod::Quarterly => self.price.quarterly,
            BillingPeriod::Yearly => self.price.yearly,
        }
    }

    /// Savings of `period` over paying monthly, as a whole percentage. A period priced above
    /// the equivalent monthly total reports 0 rather than a negative saving.
    pub fn discount_percentage(&self, period: BillingPeriod) -> u32 {
        let regular = u64::from(self.price.monthly) * u64::from(period.months());
        if regular == 0 {
            return 0;
        }

        let savings = regular.saturating_sub(u64::from(self.price(period)));
        (savings as f64 / regular as f64 * 100.0).round() as u32
    }
}

/// Available plans, in display order.
pub static PLANS: &[Plan] = &[
    Plan {
        id: "basic",
        name: "Basic",
        price: PlanPrice {
            monthly: 499,
            quarterly: 1299,
            yearly: 4999,
        },
        description: "Essential fitness guidance for beginners",
        features: &[
            "Basic workout routines",
            "General meal suggestions",
            "Standard exercise library",
            "Weekly fitness tips",
            "Limited workout videos",
        ],
        highlight: false,
    },
    Plan {
        id: "premium",
        name: "Premium",
        price: PlanPrice {
            monthly: 999,
            quarterly: 2499,
            yearly: 8999,
        },
        description: "Comprehensive fitness solution for serious enthusiasts",
        features: &[
            "Personalized workout plans",
            "Custom meal plans with recipes",
            "Full exercise video library",
            "Progress tracking",
            "Nutrition calculator",
            "Email support",
            "1 monthly coaching call",
        ],
        highlight: true,
    },
    Plan {
        id: "ultimate",
        name: "Ultimate",
        price: PlanPrice {
            monthly: 1999,
            quarterly: 4999,
            yearly: 15999,
        },
        description: "Elite training experience with personal guidance",
        features: &[
            "All Premium features",
            "Priority 1-on-1 coaching",
            "Advanced performance analytics",
            "Personalized supplement advice",
            "Direct trainer chat support",
            "Weekly video consultations",
            "Custom training programs",
        ],
        highlight: false,
    },
];

/// Finds a plan by id.
pub fn find_plan(id: &str) -> Option<&'static Plan> {
    PLANS.iter().find(|plan| plan.id == id)
}

/// Formats an amount in paise as rupees, e.g. `₹49.99` or `₹50`.
pub fn format_price(paise: u32) -> String {
    let rupees = paise / 100;
    match paise % 100 {
        0 => format!("₹{rupees}"),
        fraction => format!("₹{rupees}.{fraction:02}"),
    }
}
