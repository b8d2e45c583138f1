use std::io::{Read, Write};

use rust_decimal::Decimal;
use salary_core::{
    DEFAULT_DEPENDENT_COUNT, DEFAULT_NON_TAXABLE_ALLOWANCE, SalaryInput, SalaryReport,
    SalaryReportCalculator,
};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur when reading or writing payroll CSV data.
#[derive(Debug, Error)]
pub enum PayrollLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("CSV write error: {0}")]
    CsvWrite(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{field} for employee '{employee}' is negative")]
    NegativeField {
        employee: String,
        field: &'static str,
    },
}

impl From<csv::Error> for PayrollLoaderError {
    fn from(err: csv::Error) -> Self {
        PayrollLoaderError::CsvParse(err.to_string())
    }
}

/// A single row of a payroll input CSV file.
///
/// - `employee`: free-form identifier carried through to the output
/// - `pre_tax_salary`: annual gross salary
/// - `dependent_count`: dependents including the employee (empty for 1)
/// - `non_taxable_allowance`: annual non-taxable allowance (empty for 1,200,000)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PayrollRecord {
    pub employee: String,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub pre_tax_salary: Decimal,
    #[serde(default)]
    pub dependent_count: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    pub non_taxable_allowance: Option<Decimal>,
}

impl PayrollRecord {
    /// Converts the record into calculator input, filling in defaults.
    pub fn to_input(&self) -> SalaryInput {
        SalaryInput {
            pre_tax_salary: self.pre_tax_salary,
            dependent_count: self.dependent_count.unwrap_or(DEFAULT_DEPENDENT_COUNT),
            non_taxable_allowance: self
                .non_taxable_allowance
                .unwrap_or(DEFAULT_NON_TAXABLE_ALLOWANCE),
        }
    }
}

impl PayrollRecord {
    fn check_non_negative(&self) -> Result<(), PayrollLoaderError> {
        let amounts = [
            ("pre_tax_salary", Some(self.pre_tax_salary)),
            ("non_taxable_allowance", self.non_taxable_allowance),
        ];

        for (field, amount) in amounts {
            if amount.is_some_and(|a| a < Decimal::ZERO) {
                return Err(PayrollLoaderError::NegativeField {
                    employee: self.employee.clone(),
                    field,
                });
            }
        }
        Ok(())
    }
}

fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.trim().parse::<Decimal>().map_err(serde::de::Error::custom)
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// A computed report tagged with the employee it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct PayrollReportRow {
    pub employee: String,
    pub report: SalaryReport,
}

/// Batch processing of payroll CSV files.
///
/// Reads employee rows, runs each through a [`SalaryReportCalculator`], and
/// writes one output row per employee with every report field.
pub struct PayrollLoader;

impl PayrollLoader {
    /// Parse payroll records from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file or a
    /// byte slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<PayrollRecord>, PayrollLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: PayrollRecord = result?;
            record.check_non_negative()?;
            if record.dependent_count == Some(0) {
                warn!(
                    employee = %record.employee,
                    "dependent count is zero; the employee is normally counted"
                );
            }
            records.push(record);
        }

        debug!(count = records.len(), "parsed payroll records");
        Ok(records)
    }

    /// Computes a report for every record, preserving input order.
    pub fn compute(
        calculator: &SalaryReportCalculator,
        records: &[PayrollRecord],
    ) -> Vec<PayrollReportRow> {
        records
            .iter()
            .map(|record| PayrollReportRow {
                employee: record.employee.clone(),
                report: calculator.calculate(&record.to_input()),
            })
            .collect()
    }

    /// Writes report rows as CSV, headed by `employee` and the report field names.
    ///
    /// Unless `exact` is set, amounts are rounded half-up to two decimal
    /// places. Returns the number of rows written.
    pub fn write<W: Write>(
        writer: W,
        rows: &[PayrollReportRow],
        exact: bool,
    ) -> Result<usize, PayrollLoaderError> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        let mut header = vec!["employee"];
        header.extend(SalaryReport::FIELD_NAMES);
        csv_writer
            .write_record(&header)
            .map_err(|e| PayrollLoaderError::CsvWrite(e.to_string()))?;

        for row in rows {
            let report = if exact {
                row.report.clone()
            } else {
                row.report.rounded()
            };

            let mut record = vec![row.employee.clone()];
            record.extend(
                report
                    .fields()
                    .iter()
                    .map(|(_, amount)| amount.normalize().to_string()),
            );
            csv_writer
                .write_record(&record)
                .map_err(|e| PayrollLoaderError::CsvWrite(e.to_string()))?;
        }

        csv_writer.flush()?;
        Ok(rows.len())
    }
}
