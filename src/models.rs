use chrono::NaiveDate;
use diesel::prelude::*;
use serde::Serialize;

#[derive(Queryable, Selectable, Serialize, Clone, Debug, PartialEq)]
#[diesel(table_name = crate::schema::companies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Queryable, Selectable, Serialize, Clone, Debug, PartialEq)]
#[diesel(table_name = crate::schema::companies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CompanySummary {
    pub code: String,
    pub name: String,
}

#[derive(Insertable, Clone, Debug)]
#[diesel(table_name = crate::schema::companies)]
pub struct NewCompany {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// Everything but the code. A `None` description clears the column.
#[derive(AsChangeset, Clone, Debug)]
#[diesel(table_name = crate::schema::companies)]
#[diesel(treat_none_as_null = true)]
pub struct CompanyChanges {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Queryable, Selectable, Serialize, Clone, Debug, PartialEq)]
#[diesel(table_name = crate::schema::invoices)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Invoice {
    pub id: i32,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

#[derive(Queryable, Selectable, Serialize, Clone, Debug, PartialEq)]
#[diesel(table_name = crate::schema::invoices)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct InvoiceSummary {
    pub id: i32,
    pub comp_code: String,
}

/// `paid`, `add_date` and `paid_date` are left to the column defaults.
#[derive(Insertable, Clone, Debug)]
#[diesel(table_name = crate::schema::invoices)]
pub struct NewInvoice {
    pub comp_code: String,
    pub amt: f64,
}
