use std::sync::Arc;

use axum::{Json, extract::State as AxumState};
use serde::{Deserialize, Serialize};

use pricing::{
    fee::{Zone, ZoneMode, flat_fee},
    geo::geo_fee,
};

use crate::{
    checkout::{OrderItem, order_message, subtotal, whatsapp_link},
    error::AppError,
    state::{Quoter, State},
    utils::{format_address, sanitize},
};

#[derive(Deserialize)]
pub struct AddressPayload {
    pub street: String,
    pub number: String,
    #[serde(default)]
    pub neighborhood: String,
    #[serde(default)]
    pub postal_code: String,
}

/// Flat deployments send `zone` + `distance_km`; geo deployments send
/// `address`. The other fields are ignored by the active strategy.
#[derive(Deserialize)]
pub struct QuoteRequest {
    pub zone: Option<String>,
    pub distance_km: Option<f64>,
    pub address: Option<AddressPayload>,
}

#[derive(Serialize)]
pub struct QuoteResponse {
    pub fee: f64,
    pub distance_km: Option<f64>,
    pub strategy: &'static str,
}

#[derive(Deserialize)]
pub struct CheckoutRequest {
    pub customer: String,
    pub address: AddressPayload,
    pub items: Vec<OrderItem>,
    pub zone: Option<String>,
    pub distance_km: Option<f64>,
}

#[derive(Serialize)]
pub struct CheckoutResponse {
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub total: f64,
    pub message: String,
    pub link: String,
}

pub struct FeeQuote {
    pub fee: f64,
    pub distance_km: Option<f64>,
    pub strategy: &'static str,
}

/// One fee resolution path for both handlers. The fee is always computed
/// here, never taken from the client.
pub async fn resolve_fee(
    state: &State,
    zone: Option<&str>,
    distance_km: Option<f64>,
    address: Option<&AddressPayload>,
) -> Result<FeeQuote, AppError> {
    match &state.quoter {
        Quoter::Flat => {
            let zone = zone.ok_or(AppError::MalformedPayload)?;
            let distance_km = distance_km.ok_or(AppError::MalformedPayload)?;

            if !distance_km.is_finite() || distance_km < 0.0 {
                return Err(AppError::MalformedPayload);
            }

            let mode = if state.config.legacy_zones {
                ZoneMode::Legacy
            } else {
                ZoneMode::Strict
            };

            let zone = Zone::parse(zone, mode)?;
            let fee = flat_fee(&state.config.flat, zone, distance_km);

            Ok(FeeQuote {
                fee,
                distance_km: Some(distance_km),
                strategy: "flat",
            })
        }
        Quoter::Geo(client) => {
            let address = address.ok_or(AppError::MalformedPayload)?;

            // The geocoder needs at least a street and a number.
            if sanitize(&address.street).is_empty() || sanitize(&address.number).is_empty() {
                return Err(AppError::MalformedPayload);
            }

            let line = format_address(address);
            let quote = geo_fee(
                client,
                client,
                &state.config.tiers,
                state.config.store(),
                &line,
            )
            .await?;

            Ok(FeeQuote {
                fee: quote.fee,
                distance_km: Some(quote.distance_km),
                strategy: "geo",
            })
        }
    }
}

pub async fn quote_handler(
    AxumState(state): AxumState<Arc<State>>,
    Json(payload): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, AppError> {
    let quote = resolve_fee(
        &state,
        payload.zone.as_deref(),
        payload.distance_km,
        payload.address.as_ref(),
    )
    .await?;

    Ok(Json(QuoteResponse {
        fee: quote.fee,
        distance_km: quote.distance_km,
        strategy: quote.strategy,
    }))
}

pub async fn checkout_handler(
    AxumState(state): AxumState<Arc<State>>,
    Json(payload): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>, AppError> {
    validate_order(&payload)?;

    let quote = resolve_fee(
        &state,
        payload.zone.as_deref(),
        payload.distance_km,
        Some(&payload.address),
    )
    .await?;

    let items_total = subtotal(&payload.items);
    let customer = sanitize(&payload.customer);
    let address_line = format_address(&payload.address);
    let message = order_message(&customer, &address_line, &payload.items, quote.fee);
    let link = whatsapp_link(&state.config.whatsapp_number, &message);

    Ok(Json(CheckoutResponse {
        subtotal: items_total,
        delivery_fee: quote.fee,
        total: items_total + quote.fee,
        message,
        link,
    }))
}

fn validate_order(payload: &CheckoutRequest) -> Result<(), AppError> {
    if payload.items.is_empty() || sanitize(&payload.customer).is_empty() {
        return Err(AppError::MalformedPayload);
    }

    for item in &payload.items {
        if item.quantity == 0
            || !item.unit_price.is_finite()
            || item.unit_price < 0.0
            || sanitize(&item.name).is_empty()
        {
            return Err(AppError::MalformedPayload);
        }
    }

    Ok(())
}
