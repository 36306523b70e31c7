use askama::{Error, Template};

/// Receipt mail sent right after checkout.
#[derive(Template, Debug)]
#[template(path = "order_confirmation.html")]
pub struct OrderConfirmationTemplate<'a> {
    pub customer_name: &'a str,
    pub order_number: i32,
    pub total: &'a str,
}

/// Pickup notice sent when an order reaches `ready_for_pickup`.
#[derive(Template, Debug)]
#[template(path = "order_ready.html")]
pub struct OrderReadyTemplate<'a> {
    pub customer_name: &'a str,
    pub order_number: i32,
}

pub fn render_order_confirmation(
    customer_name: &str,
    order_number: i32,
    total: &str,
) -> Result<String, Error> {
    OrderConfirmationTemplate {
        customer_name,
        order_number,
        total,
    }
    .render()
}

pub fn render_order_ready(customer_name: &str, order_number: i32) -> Result<String, Error> {
    OrderReadyTemplate {
        customer_name,
        order_number,
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_includes_number_and_total() {
        let html = render_order_confirmation("Ana", 1042, "$ 350.00").unwrap();
        assert!(html.contains("1042"));
        assert!(html.contains("$ 350.00"));
        assert!(html.contains("Ana"));
    }

    #[test]
    fn ready_notice_includes_number() {
        let html = render_order_ready("Ana", 1042).unwrap();
        assert!(html.contains("1042"));
    }
}
