pub mod date_range;
pub mod provider;

// Re-export core models for easy access
pub use date_range::{DateRange, InvoiceCalendar, MonthSlice, MonthlyInvoiceCalendar};
pub use provider::{ProviderRecord, ProviderRef, ProviderType};
