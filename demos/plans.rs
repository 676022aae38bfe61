use fitfusion::pricing::{format_price, BillingPeriod, PLANS};

fn main() {
    for period in BillingPeriod::ALL {
        println!("{period}");
        for plan in PLANS {
            let marker = if plan.highlight { " (most popular)" } else { "" };
            let price = format_price(plan.price(period));
            match plan.discount_percentage(period) {
                0 => println!("  {}{marker}: {price} / {}", plan.name, period.unit()),
                discount => println!("  {}{marker}: {price} / {} (save {discount}%)", plan.name, period.unit()),
            }
        }
    }
}
