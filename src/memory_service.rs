//! In-memory `Store` used by the handler tests. It mirrors the constraints
//! declared in the migrations: unique company code and name, an existing
//! company behind every invoice, a positive amount, and cascading deletes.

use crate::models::{
    Company, CompanyChanges, CompanySummary, Invoice, InvoiceSummary, NewCompany, NewInvoice,
};
use crate::store::{Store, StoreError, StoreResult, COMPANY_CODE_KEY, COMPANY_NAME_KEY};
use chrono::Utc;
use std::collections::BTreeMap;

#[derive(Default)]
pub struct MemoryService {
    companies: BTreeMap<String, Company>,
    invoices: BTreeMap<i32, Invoice>,
    next_id: i32,
}

impl MemoryService {
    pub fn new() -> Self {
        Self::default()
    }

    fn name_taken(&self, name: &str, except: Option<&str>) -> bool {
        self.companies
            .values()
            .any(|c| c.name == name && Some(c.code.as_str()) != except)
    }

    fn check_amount(amt: f64) -> StoreResult<()> {
        if amt > 0.0 {
            Ok(())
        } else {
            Err(StoreError::Constraint {
                constraint: Some("invoices_amt_check".to_owned()),
            })
        }
    }

    fn summary(invoice: &Invoice) -> InvoiceSummary {
        InvoiceSummary {
            id: invoice.id,
            comp_code: invoice.comp_code.clone(),
        }
    }
}

impl Store for MemoryService {
    fn list_companies(&mut self) -> StoreResult<Vec<CompanySummary>> {
        let mut all: Vec<CompanySummary> = self
            .companies
            .values()
            .map(|c| CompanySummary {
                code: c.code.clone(),
                name: c.name.clone(),
            })
            .collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    fn find_company(&mut self, code: &str) -> StoreResult<Option<Company>> {
        Ok(self.companies.get(code).cloned())
    }

    fn create_company(&mut self, company: NewCompany) -> StoreResult<Company> {
        if self.companies.contains_key(&company.code) {
            return Err(StoreError::Duplicate {
                constraint: Some(COMPANY_CODE_KEY.to_owned()),
            });
        }
        if self.name_taken(&company.name, None) {
            return Err(StoreError::Duplicate {
                constraint: Some(COMPANY_NAME_KEY.to_owned()),
            });
        }
        let created = Company {
            code: company.code,
            name: company.name,
            description: company.description,
        };
        self.companies.insert(created.code.clone(), created.clone());
        Ok(created)
    }

    fn update_company(
        &mut self,
        code: &str,
        changes: CompanyChanges,
    ) -> StoreResult<Option<Company>> {
        if !self.companies.contains_key(code) {
            return Ok(None);
        }
        if self.name_taken(&changes.name, Some(code)) {
            return Err(StoreError::Duplicate {
                constraint: Some(COMPANY_NAME_KEY.to_owned()),
            });
        }
        Ok(self.companies.get_mut(code).map(|company| {
            company.name = changes.name;
            company.description = changes.description;
            company.clone()
        }))
    }

    fn delete_company(&mut self, code: &str) -> StoreResult<bool> {
        if self.companies.remove(code).is_none() {
            return Ok(false);
        }
        self.invoices.retain(|_, invoice| invoice.comp_code != code);
        Ok(true)
    }

    fn list_invoices(&mut self) -> StoreResult<Vec<InvoiceSummary>> {
        Ok(self.invoices.values().map(Self::summary).collect())
    }

    fn invoices_for_company(&mut self, code: &str) -> StoreResult<Vec<InvoiceSummary>> {
        Ok(self
            .invoices
            .values()
            .filter(|invoice| invoice.comp_code == code)
            .map(Self::summary)
            .collect())
    }

    fn find_invoice(&mut self, id: i32) -> StoreResult<Option<Invoice>> {
        Ok(self.invoices.get(&id).cloned())
    }

    fn create_invoice(&mut self, invoice: NewInvoice) -> StoreResult<Invoice> {
        if !self.companies.contains_key(&invoice.comp_code) {
            return Err(StoreError::Constraint {
                constraint: Some("invoices_comp_code_fkey".to_owned()),
            });
        }
        Self::check_amount(invoice.amt)?;

        self.next_id += 1;
        let created = Invoice {
            id: self.next_id,
            comp_code: invoice.comp_code,
            amt: invoice.amt,
            paid: false,
            add_date: Utc::now().date_naive(),
            paid_date: None,
        };
        self.invoices.insert(created.id, created.clone());
        Ok(created)
    }

    fn update_invoice_amount(&mut self, id: i32, amt: f64) -> StoreResult<Option<Invoice>> {
        if !self.invoices.contains_key(&id) {
            return Ok(None);
        }
        Self::check_amount(amt)?;
        Ok(self.invoices.get_mut(&id).map(|invoice| {
            invoice.amt = amt;
            invoice.clone()
        }))
    }

    fn delete_invoice(&mut self, id: i32) -> StoreResult<bool> {
        Ok(self.invoices.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> NewCompany {
        NewCompany {
            code: "acme".to_owned(),
            name: "Acme".to_owned(),
            description: None,
        }
    }

    #[test]
    fn ids_are_assigned_in_order() {
        let mut store = MemoryService::new();
        store.create_company(acme()).unwrap();
        let first = store
            .create_invoice(NewInvoice { comp_code: "acme".into(), amt: 10.0 })
            .unwrap();
        let second = store
            .create_invoice(NewInvoice { comp_code: "acme".into(), amt: 20.0 })
            .unwrap();
        assert_eq!((first.id, second.id), (1, 2));
        assert!(!first.paid);
        assert_eq!(first.paid_date, None);
    }

    #[test]
    fn duplicate_code_and_name_are_rejected() {
        let mut store = MemoryService::new();
        store.create_company(acme()).unwrap();
        assert!(matches!(
            store.create_company(acme()),
            Err(StoreError::Duplicate { .. })
        ));
        let same_name = NewCompany {
            code: "acme2".to_owned(),
            ..acme()
        };
        assert!(matches!(
            store.create_company(same_name),
            Err(StoreError::Duplicate { .. })
        ));
    }

    #[test]
    fn deleting_company_cascades_to_invoices() {
        let mut store = MemoryService::new();
        store.create_company(acme()).unwrap();
        let invoice = store
            .create_invoice(NewInvoice { comp_code: "acme".into(), amt: 5.0 })
            .unwrap();
        assert!(store.delete_company("acme").unwrap());
        assert_eq!(store.find_invoice(invoice.id).unwrap(), None);
        assert!(store.list_invoices().unwrap().is_empty());
    }

    #[test]
    fn non_positive_amount_is_a_constraint_error() {
        let mut store = MemoryService::new();
        store.create_company(acme()).unwrap();
        assert!(matches!(
            store.create_invoice(NewInvoice { comp_code: "acme".into(), amt: 0.0 }),
            Err(StoreError::Constraint { .. })
        ));
    }
}
