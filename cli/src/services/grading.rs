//! Grading service: runs requests through the core against configured tables

use std::io::Read;

use shared::{GradingOutcome, GradingRequest, ThresholdTables};

use crate::error::{AppError, AppResult};

/// Grading service holding the threshold tables for a run
#[derive(Debug, Clone)]
pub struct GradingService {
    tables: ThresholdTables,
}

impl GradingService {
    /// Create a new GradingService, rejecting tables with out-of-range limits
    pub fn new(tables: ThresholdTables) -> AppResult<Self> {
        tables.validate().map_err(AppError::InvalidTables)?;
        Ok(Self { tables })
    }

    pub fn tables(&self) -> &ThresholdTables {
        &self.tables
    }

    /// Grade one request
    pub fn grade(&self, request: GradingRequest) -> AppResult<GradingOutcome> {
        let commodity = request.commodity();
        tracing::info!(%commodity, "Grading sample");

        let outcome = request.grade(&self.tables)?;

        match &outcome {
            GradingOutcome::Corn(grade) => {
                tracing::debug!(defects = ?grade.defects, damaged = grade.defects.damaged(), "Corn defect table");
            }
            GradingOutcome::Soybean(grade) => {
                tracing::debug!(
                    defects = ?grade.defects,
                    damaged = grade.defects.damaged(),
                    severe = grade.defects.severe(),
                    "Soybean defect table"
                );
            }
        }

        if !outcome.within_tolerances() {
            tracing::warn!(%commodity, "Sample exceeds at least one tolerance limit");
        }

        tracing::info!(
            %commodity,
            classification = %outcome.summary(),
            total_discount_kg = outcome.total_discount_kg(),
            "Grading completed"
        );

        Ok(outcome)
    }

    /// Parse a JSON request and grade it
    pub fn grade_json(&self, json: &str) -> AppResult<GradingOutcome> {
        let request = GradingRequest::from_json(json)?;
        self.grade(request)
    }

    /// Read a JSON request from `reader` and grade it
    pub fn grade_reader<R: Read>(&self, mut reader: R) -> AppResult<GradingOutcome> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        self.grade_json(&json)
    }
}
