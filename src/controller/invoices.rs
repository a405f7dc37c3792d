use crate::app_state::AppState;
use crate::controller::is_blank;
use crate::error::ApiError;
use crate::models::{Company, NewInvoice};
use actix_web::{web, HttpResponse, Responder};
use chrono::NaiveDate;
use eyre::eyre;
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Deserialize)]
pub struct CreateInvoice {
    comp_code: String,
    amt: f64,
}

#[derive(Deserialize)]
pub struct UpdateInvoice {
    amt: f64,
}

/// An invoice with its owning company embedded in place of `comp_code`.
#[derive(Serialize)]
struct InvoiceDetail {
    id: i32,
    amt: f64,
    paid: bool,
    add_date: NaiveDate,
    paid_date: Option<NaiveDate>,
    company: Company,
}

fn invoice_not_found(id: i32) -> ApiError {
    ApiError::NotFound(format!("No invoice found at {id}"))
}

pub async fn list_invoices(ctx: web::Data<AppState>) -> Result<impl Responder, ApiError> {
    let invoices = ctx.with_store(|store| Ok(store.list_invoices()?)).await?;
    Ok(web::Json(json!({ "invoices": invoices })))
}

pub async fn get_invoice(
    path: web::Path<(i32,)>,
    ctx: web::Data<AppState>,
) -> Result<impl Responder, ApiError> {
    let id = path.into_inner().0;
    let detail = ctx
        .with_store(move |store| {
            let invoice = store.find_invoice(id)?.ok_or_else(|| invoice_not_found(id))?;
            let company = store.find_company(&invoice.comp_code)?.ok_or_else(|| {
                ApiError::Unexpected(eyre!(
                    "invoice {} references missing company {}",
                    id,
                    invoice.comp_code
                ))
            })?;

            Ok(InvoiceDetail {
                id: invoice.id,
                amt: invoice.amt,
                paid: invoice.paid,
                add_date: invoice.add_date,
                paid_date: invoice.paid_date,
                company,
            })
        })
        .await?;

    Ok(web::Json(json!({ "invoice": detail })))
}

pub async fn create_invoice(
    data: web::Json<CreateInvoice>,
    ctx: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let CreateInvoice { comp_code, amt } = data.into_inner();
    if is_blank(&comp_code) {
        return Err(ApiError::BadRequest("comp_code is required".to_owned()));
    }

    let invoice = ctx
        .with_store(move |store| {
            if store.find_company(&comp_code)?.is_none() {
                return Err(ApiError::BadRequest(format!(
                    "No company found with code {comp_code}"
                )));
            }
            Ok(store.create_invoice(NewInvoice { comp_code, amt })?)
        })
        .await?;

    info!("Created invoice {} for {}", invoice.id, invoice.comp_code);
    Ok(HttpResponse::Created().json(json!({ "invoice": invoice })))
}

pub async fn update_invoice(
    path: web::Path<(i32,)>,
    data: web::Json<UpdateInvoice>,
    ctx: web::Data<AppState>,
) -> Result<impl Responder, ApiError> {
    let id = path.into_inner().0;
    let amt = data.amt;
    let invoice = ctx
        .with_store(move |store| {
            store
                .update_invoice_amount(id, amt)?
                .ok_or_else(|| invoice_not_found(id))
        })
        .await?;

    info!("Updated amount of invoice {}", id);
    Ok(web::Json(json!({ "invoice": invoice })))
}

pub async fn delete_invoice(
    path: web::Path<(i32,)>,
    ctx: web::Data<AppState>,
) -> Result<impl Responder, ApiError> {
    let id = path.into_inner().0;
    if !ctx.with_store(move |store| Ok(store.delete_invoice(id)?)).await? {
        return Err(invoice_not_found(id));
    }

    info!("Deleted invoice {}", id);
    Ok(web::Json(json!({ "status": "deleted" })))
}
