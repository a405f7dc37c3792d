use crate::models::{
    Company, CompanyChanges, CompanySummary, Invoice, InvoiceSummary, NewCompany, NewInvoice,
};
use crate::store::{Store, StoreResult};
use diesel::prelude::*;

pub struct DbService {
    connection: PgConnection,
}

impl DbService {
    pub fn new(connection: PgConnection) -> Self {
        Self { connection }
    }
}

impl Store for DbService {
    fn list_companies(&mut self) -> StoreResult<Vec<CompanySummary>> {
        use crate::schema::companies::dsl::*;

        Ok(companies
            .order(name.asc())
            .select(CompanySummary::as_select())
            .load(&mut self.connection)?)
    }

    fn find_company(&mut self, company_code: &str) -> StoreResult<Option<Company>> {
        use crate::schema::companies::dsl::*;

        Ok(companies
            .find(company_code)
            .select(Company::as_select())
            .first(&mut self.connection)
            .optional()?)
    }

    fn create_company(&mut self, company: NewCompany) -> StoreResult<Company> {
        use crate::schema::companies;

        Ok(diesel::insert_into(companies::table)
            .values(&company)
            .returning(Company::as_returning())
            .get_result(&mut self.connection)?)
    }

    fn update_company(
        &mut self,
        company_code: &str,
        changes: CompanyChanges,
    ) -> StoreResult<Option<Company>> {
        use crate::schema::companies::dsl::*;

        Ok(diesel::update(companies.find(company_code))
            .set(&changes)
            .returning(Company::as_returning())
            .get_result(&mut self.connection)
            .optional()?)
    }

    fn delete_company(&mut self, company_code: &str) -> StoreResult<bool> {
        use crate::schema::companies::dsl::*;

        // invoices go with it through ON DELETE CASCADE
        let deleted = diesel::delete(companies.find(company_code)).execute(&mut self.connection)?;
        Ok(deleted > 0)
    }

    fn list_invoices(&mut self) -> StoreResult<Vec<InvoiceSummary>> {
        use crate::schema::invoices::dsl::*;

        Ok(invoices
            .order(id.asc())
            .select(InvoiceSummary::as_select())
            .load(&mut self.connection)?)
    }

    fn invoices_for_company(&mut self, company_code: &str) -> StoreResult<Vec<InvoiceSummary>> {
        use crate::schema::invoices::dsl::*;

        Ok(invoices
            .filter(comp_code.eq(company_code))
            .order(id.asc())
            .select(InvoiceSummary::as_select())
            .load(&mut self.connection)?)
    }

    fn find_invoice(&mut self, invoice_id: i32) -> StoreResult<Option<Invoice>> {
        use crate::schema::invoices::dsl::*;

        Ok(invoices
            .find(invoice_id)
            .select(Invoice::as_select())
            .first(&mut self.connection)
            .optional()?)
    }

    fn create_invoice(&mut self, invoice: NewInvoice) -> StoreResult<Invoice> {
        use crate::schema::invoices;

        Ok(diesel::insert_into(invoices::table)
            .values(&invoice)
            .returning(Invoice::as_returning())
            .get_result(&mut self.connection)?)
    }

    fn update_invoice_amount(&mut self, invoice_id: i32, amount: f64) -> StoreResult<Option<Invoice>> {
        use crate::schema::invoices::dsl::*;

        Ok(diesel::update(invoices.find(invoice_id))
            .set(amt.eq(amount))
            .returning(Invoice::as_returning())
            .get_result(&mut self.connection)
            .optional()?)
    }

    fn delete_invoice(&mut self, invoice_id: i32) -> StoreResult<bool> {
        use crate::schema::invoices::dsl::*;

        let deleted = diesel::delete(invoices.find(invoice_id)).execute(&mut self.connection)?;
        Ok(deleted > 0)
    }
}
