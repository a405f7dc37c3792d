use crate::app_state::AppState;
use crate::controller::is_blank;
use crate::error::ApiError;
use crate::models::{Company, CompanyChanges, InvoiceSummary, NewCompany};
use actix_web::{web, HttpResponse, Responder};
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Deserialize)]
pub struct CreateCompany {
    code: String,
    name: String,
    description: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateCompany {
    name: String,
    description: Option<String>,
}

#[derive(Serialize)]
struct CompanyDetail {
    #[serde(flatten)]
    company: Company,
    invoices: Vec<InvoiceSummary>,
}

fn company_not_found(code: &str) -> ApiError {
    ApiError::NotFound(format!("No company found with code {code}"))
}

pub async fn list_companies(ctx: web::Data<AppState>) -> Result<impl Responder, ApiError> {
    let companies = ctx.with_store(|store| Ok(store.list_companies()?)).await?;
    Ok(web::Json(json!({ "companies": companies })))
}

/// Company plus the ids of the invoices that belong to it.
pub async fn get_company(
    path: web::Path<(String,)>,
    ctx: web::Data<AppState>,
) -> Result<impl Responder, ApiError> {
    let code = path.into_inner().0;
    let detail = ctx
        .with_store(move |store| {
            let company = store
                .find_company(&code)?
                .ok_or_else(|| company_not_found(&code))?;
            let invoices = store.invoices_for_company(&code)?;
            Ok(CompanyDetail { company, invoices })
        })
        .await?;

    Ok(web::Json(json!({ "company": detail })))
}

pub async fn create_company(
    data: web::Json<CreateCompany>,
    ctx: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let CreateCompany {
        code,
        name,
        description,
    } = data.into_inner();
    if is_blank(&code) || is_blank(&name) {
        return Err(ApiError::BadRequest(
            "Company code and name are required".to_owned(),
        ));
    }

    let new_company = NewCompany {
        code,
        name,
        description,
    };
    let company = ctx
        .with_store(move |store| Ok(store.create_company(new_company)?))
        .await?;

    info!("Created company {}", company.code);
    Ok(HttpResponse::Created().json(json!({ "company": company })))
}

pub async fn update_company(
    path: web::Path<(String,)>,
    data: web::Json<UpdateCompany>,
    ctx: web::Data<AppState>,
) -> Result<impl Responder, ApiError> {
    let code = path.into_inner().0;
    let UpdateCompany { name, description } = data.into_inner();
    if is_blank(&name) {
        return Err(ApiError::BadRequest("Company name is required".to_owned()));
    }

    let changes = CompanyChanges { name, description };
    let company = ctx
        .with_store(move |store| {
            store
                .update_company(&code, changes)?
                .ok_or_else(|| company_not_found(&code))
        })
        .await?;

    info!("Updated company {}", company.code);
    Ok(web::Json(json!({ "company": company })))
}

pub async fn delete_company(
    path: web::Path<(String,)>,
    ctx: web::Data<AppState>,
) -> Result<impl Responder, ApiError> {
    let code = path.into_inner().0;
    let target = code.clone();
    if !ctx.with_store(move |store| Ok(store.delete_company(&target)?)).await? {
        return Err(company_not_found(&code));
    }

    info!("Deleted company {} and its invoices", code);
    Ok(web::Json(json!({ "status": "deleted" })))
}
