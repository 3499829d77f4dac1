// Resume analysis core.
// Implements: the additive quality rubric, defect-pattern classification,
// and the detailed checker report. Everything below handlers is a pure
// function over the submitted document.

pub mod handlers;
pub mod issues;
pub mod report;
pub mod rubric;
