//! # WhatsApp Handoff
//!
//! The order of record lives in WhatsApp. Checkout renders the order as a
//! plain-text message and returns a wa.me link; the shop owner confirms
//! the order in the conversation.

use serde::Deserialize;
use urlencoding::encode;

#[derive(Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

pub fn subtotal(items: &[OrderItem]) -> f64 {
    items
        .iter()
        .map(|item| item.quantity as f64 * item.unit_price)
        .sum()
}

// Prices read Brazilian style: "R$ 12,50".
pub fn format_brl(value: f64) -> String {
    format!("R$ {value:.2}").replace('.', ",")
}

pub fn order_message(
    customer: &str,
    address_line: &str,
    items: &[OrderItem],
    delivery_fee: f64,
) -> String {
    let mut message = String::from("*Pedido Dona Capivara*\n\n");

    for item in items {
        message.push_str(&format!(
            "{}x {} - {}\n",
            item.quantity,
            item.name,
            format_brl(item.quantity as f64 * item.unit_price)
        ));
    }

    let items_total = subtotal(items);

    message.push_str(&format!("\nSubtotal: {}\n", format_brl(items_total)));

    if delivery_fee == 0.0 {
        message.push_str("Entrega: Grátis\n");
    } else {
        message.push_str(&format!("Entrega: {}\n", format_brl(delivery_fee)));
    }

    message.push_str(&format!(
        "Total: {}\n",
        format_brl(items_total + delivery_fee)
    ));
    message.push_str(&format!("\nNome: {customer}\n"));
    message.push_str(&format!("Endereço: {address_line}\n"));

    message
}

pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", number, encode(message))
}
