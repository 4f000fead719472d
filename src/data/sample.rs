//! Candidate rows, the admission label and the feature columns

use crate::error::{ConfigurationError, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of feature columns per candidate.
pub const N_FEATURES: usize = 4;

/// Admission outcome for a candidate.
///
/// The integer encoding (0, 1, 2) is the class index used by the confusion
/// matrix and the economic reward vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Admission {
    Rejected = 0,
    Waitlisted = 1,
    Admitted = 2,
}

impl Admission {
    /// All labels in class-index order.
    pub const ALL: [Admission; 3] = [Self::Rejected, Self::Waitlisted, Self::Admitted];

    /// Class index used for matrix rows/columns and reward lookup.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short class name used in reports and chart axes.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rejected => "Rejected",
            Self::Waitlisted => "Waitlisted",
            Self::Admitted => "Admitted",
        }
    }

    /// Sentence shown to the user after a one-off prediction.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Rejected => "Candidate not admitted or rejected",
            Self::Waitlisted => "Candidate waitlisted",
            Self::Admitted => "Candidate admitted",
        }
    }

    /// Class indices of every label, in order.
    pub fn indices() -> Vec<usize> {
        Self::ALL.iter().map(|a| a.index()).collect()
    }
}

impl TryFrom<i64> for Admission {
    type Error = ConfigurationError;

    fn try_from(value: i64) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Rejected),
            1 => Ok(Self::Waitlisted),
            2 => Ok(Self::Admitted),
            other => Err(ConfigurationError::UnknownLabel(other)),
        }
    }
}

impl From<Admission> for i64 {
    fn from(label: Admission) -> Self {
        label as i64
    }
}

impl fmt::Display for Admission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Feature column of the candidate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Admission exam score
    ExamScore,
    /// Psychometric test score
    Psychometric,
    /// Years of work experience
    WorkExperience,
    /// Age in years
    Age,
}

impl Feature {
    /// All features in column order.
    pub const ALL: [Feature; N_FEATURES] =
        [Self::ExamScore, Self::Psychometric, Self::WorkExperience, Self::Age];

    /// Column name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ExamScore => "exam_score",
            Self::Psychometric => "psychometric",
            Self::WorkExperience => "work_experience",
            Self::Age => "age",
        }
    }

    /// Column position in a feature vector.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inclusive range accepted for a one-shot prediction.
    pub const fn input_range(self) -> (f64, f64) {
        match self {
            Self::ExamScore => (0.0, 1000.0),
            Self::Psychometric => (0.0, 100.0),
            Self::WorkExperience => (0.0, 10.0),
            Self::Age => (0.0, 100.0),
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The four numeric inputs describing a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandidateFeatures {
    pub exam_score: f64,
    pub psychometric: f64,
    pub work_experience: f64,
    pub age: f64,
}

impl CandidateFeatures {
    pub fn new(exam_score: f64, psychometric: f64, work_experience: f64, age: f64) -> Self {
        Self { exam_score, psychometric, work_experience, age }
    }

    /// Feature vector in [`Feature::ALL`] order.
    pub fn to_vec(&self) -> Vec<f64> {
        vec![self.exam_score, self.psychometric, self.work_experience, self.age]
    }

    /// Value of a single feature column.
    pub fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::ExamScore => self.exam_score,
            Feature::Psychometric => self.psychometric,
            Feature::WorkExperience => self.work_experience,
            Feature::Age => self.age,
        }
    }

    /// Reject values outside each feature's [`Feature::input_range`].
    pub fn check_ranges(&self) -> Result<()> {
        for feature in Feature::ALL {
            let value = self.get(feature);
            let (min, max) = feature.input_range();
            if !(min..=max).contains(&value) {
                return Err(Error::InvalidRange { field: feature.name(), value, min, max });
            }
        }
        Ok(())
    }
}

impl Default for CandidateFeatures {
    fn default() -> Self {
        Self::new(500.0, 30.0, 5.0, 40.0)
    }
}

/// One labelled candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    #[serde(flatten)]
    pub features: CandidateFeatures,
    pub label: Admission,
}

impl Sample {
    pub fn new(features: CandidateFeatures, label: Admission) -> Self {
        Self { features, label }
    }
}
