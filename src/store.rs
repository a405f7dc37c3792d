use crate::models::{
    Company, CompanyChanges, CompanySummary, Invoice, InvoiceSummary, NewCompany, NewInvoice,
};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::sync::Arc;
use tokio::sync::Mutex;

pub type SharedStore = Arc<Mutex<Box<dyn Store>>>;

/// PostgreSQL's default names for the unique constraints on `companies`.
pub const COMPANY_CODE_KEY: &str = "companies_pkey";
pub const COMPANY_NAME_KEY: &str = "companies_name_key";

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("unique constraint violated ({})", .constraint.as_deref().unwrap_or("unknown"))]
    Duplicate { constraint: Option<String> },
    #[error("integrity constraint violated ({})", .constraint.as_deref().unwrap_or("unknown"))]
    Constraint { constraint: Option<String> },
    #[error(transparent)]
    Database(DieselError),
}

impl From<DieselError> for StoreError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                StoreError::Duplicate {
                    constraint: info.constraint_name().map(str::to_owned),
                }
            }
            DieselError::DatabaseError(
                DatabaseErrorKind::ForeignKeyViolation
                | DatabaseErrorKind::CheckViolation
                | DatabaseErrorKind::NotNullViolation,
                info,
            ) => StoreError::Constraint {
                constraint: info.constraint_name().map(str::to_owned),
            },
            other => StoreError::Database(other),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Data access for both resources. Lookups and single-row writes return
/// `None`/`false` when no row matches so callers decide what "missing" means.
pub trait Store: Send {
    /// All companies, ordered by name.
    fn list_companies(&mut self) -> StoreResult<Vec<CompanySummary>>;
    fn find_company(&mut self, code: &str) -> StoreResult<Option<Company>>;
    fn create_company(&mut self, company: NewCompany) -> StoreResult<Company>;
    fn update_company(&mut self, code: &str, changes: CompanyChanges)
        -> StoreResult<Option<Company>>;
    /// Removes the company together with its invoices.
    fn delete_company(&mut self, code: &str) -> StoreResult<bool>;

    /// All invoices, ordered by id.
    fn list_invoices(&mut self) -> StoreResult<Vec<InvoiceSummary>>;
    fn invoices_for_company(&mut self, code: &str) -> StoreResult<Vec<InvoiceSummary>>;
    fn find_invoice(&mut self, id: i32) -> StoreResult<Option<Invoice>>;
    fn create_invoice(&mut self, invoice: NewInvoice) -> StoreResult<Invoice>;
    fn update_invoice_amount(&mut self, id: i32, amt: f64) -> StoreResult<Option<Invoice>>;
    fn delete_invoice(&mut self, id: i32) -> StoreResult<bool>;
}
