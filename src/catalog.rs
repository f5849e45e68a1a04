// src/catalog.rs
//! Built-in template and configurable item catalogs.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StencilError};
use crate::template::{Button, Category, Header, HeaderKind, Template};

/// A value a user may choose for any variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurableItem {
    pub key: String,
    pub label: String,
}

impl ConfigurableItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Read-only templates plus the items offered for their variables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub templates: Vec<Template>,
    #[serde(default)]
    pub items: Vec<ConfigurableItem>,
}

impl Catalog {
    pub fn new(templates: Vec<Template>, items: Vec<ConfigurableItem>) -> Self {
        Self { templates, items }
    }

    pub fn builtin() -> Self {
        Self::new(sample_templates(), configurable_items())
    }

    pub fn find_template(&self, id: &str) -> Result<&Template> {
        self.templates
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| StencilError::TemplateNotFound(id.to_string()))
    }

    pub fn templates_in(&self, category: Category) -> impl Iterator<Item = &Template> {
        self.templates.iter().filter(move |t| t.category == category)
    }

    /// Match an item by exact key, falling back to a case-insensitive
    /// label match.
    pub fn resolve_item(&self, key_or_label: &str) -> Result<&ConfigurableItem> {
        self.items
            .iter()
            .find(|item| item.key == key_or_label)
            .or_else(|| {
                self.items
                    .iter()
                    .find(|item| item.label.eq_ignore_ascii_case(key_or_label))
            })
            .ok_or_else(|| StencilError::UnknownItem(key_or_label.to_string()))
    }
}

pub fn configurable_items() -> Vec<ConfigurableItem> {
    vec![
        ConfigurableItem::new("customer_name", "Customer Name"),
        ConfigurableItem::new("order_id", "Order ID"),
        ConfigurableItem::new("total_amount", "Total Amount"),
        ConfigurableItem::new("support_link", "Support Link"),
        ConfigurableItem::new("tracking_number", "Tracking Number"),
        ConfigurableItem::new("delivery_date", "Delivery Date"),
        ConfigurableItem::new("product_name", "Product Name"),
        ConfigurableItem::new("discount_code", "Discount Code"),
    ]
}

pub fn sample_templates() -> Vec<Template> {
    vec![
        Template::new(
            "1",
            "Order Confirmation",
            Category::Transactional,
            "Hello {{customer_name}}, thank you for your order! Your order {{order_id}} has been confirmed. Total amount: {{total_amount}}. You can track your order using this link: {{support_link}}",
        ),
        Template::new(
            "2",
            "Shipping Update",
            Category::Transactional,
            "Hi {{customer_name}}! Great news! Your order {{order_id}} has been shipped. Tracking number: {{tracking_number}}. Expected delivery: {{delivery_date}}",
        ),
        Template::new(
            "3",
            "Welcome Message",
            Category::Marketing,
            "Welcome {{customer_name}}! We're excited to have you. Here's a special discount code just for you: {{discount_code}}. Use it on your next purchase!",
        ),
        Template::new(
            "4",
            "Product Recommendation",
            Category::Marketing,
            "Hi {{customer_name}}, we think you'll love our {{product_name}}! Get {{total_amount}} off your first order with code {{discount_code}}",
        ),
        Template::new(
            "5",
            "Support Follow-up",
            Category::Utility,
            "Hello {{customer_name}}, this is a follow-up on your support ticket {{order_id}}. Need more help? Contact us at {{support_link}}",
        ),
        Template::new(
            "6",
            "Delivery Reminder",
            Category::Utility,
            "Hi {{customer_name}}, your package {{tracking_number}} arrives on {{delivery_date}}. Please make sure someone is available to receive it.",
        )
        .with_header(Header::text("Delivery for order {{order_id}}"))
        .with_footer("Reply STOP to unsubscribe")
        .with_button(Button::url("Track package", "https://track.example.com/{{tracking_number}}"))
        .with_button(Button::phone("Call support", "+1 555 0100")),
        Template::new(
            "7",
            "Flash Sale",
            Category::Marketing,
            "Only today: {{product_name}} at a special price. Use code {{discount_code}} at checkout.",
        )
        .with_header(Header::media(HeaderKind::Image, "https://cdn.example.com/flash-sale.png"))
        .with_footer("Offer valid while stocks last")
        .with_button(Button::quick_reply("Shop now"))
        .with_button(Button::quick_reply("Not interested")),
        Template::new(
            "8",
            "Service Notice",
            Category::Utility,
            "Our service will be briefly unavailable tonight for scheduled maintenance. Thank you for your patience.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_ids_unique() {
        let catalog = Catalog::builtin();
        let mut ids: Vec<_> = catalog.templates.iter().map(|t| t.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.templates.len());
    }

    #[test]
    fn test_builtin_variables_resolve_to_items() {
        let catalog = Catalog::builtin();
        for template in &catalog.templates {
            for variable in template.variables() {
                assert!(
                    catalog.resolve_item(&variable).is_ok(),
                    "{} uses {} which has no item",
                    template.name,
                    variable
                );
            }
        }
    }

    #[test]
    fn test_find_template() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.find_template("2").unwrap().name, "Shipping Update");
        assert!(matches!(
            catalog.find_template("99"),
            Err(StencilError::TemplateNotFound(_))
        ));
    }

    #[test]
    fn test_templates_in_category() {
        let catalog = Catalog::builtin();
        let marketing: Vec<_> = catalog.templates_in(Category::Marketing).collect();

        assert!(!marketing.is_empty());
        assert!(marketing.iter().all(|t| t.category == Category::Marketing));
    }

    #[test]
    fn test_resolve_item_by_key_or_label() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.resolve_item("order_id").unwrap().label, "Order ID");
        assert_eq!(catalog.resolve_item("order id").unwrap().key, "order_id");
        assert!(matches!(
            catalog.resolve_item("shoe size"),
            Err(StencilError::UnknownItem(_))
        ));
    }

    #[test]
    fn test_order_confirmation_variables() {
        let catalog = Catalog::builtin();
        let vars = catalog.find_template("1").unwrap().variables();

        assert_eq!(
            vars,
            vec!["customer_name", "order_id", "total_amount", "support_link"]
        );
    }

    #[test]
    fn test_service_notice_has_no_variables() {
        let catalog = Catalog::builtin();
        assert!(!catalog.find_template("8").unwrap().has_variables());
    }
}
