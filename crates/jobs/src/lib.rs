pub mod report;

pub use report::LookupReportJob;
