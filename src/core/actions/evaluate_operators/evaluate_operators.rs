use rayon::prelude::*;
use thiserror::Error;

use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_SAMPLES, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::evaluate_operators::ports::operator::Operator;
use crate::core::data::alpha::Alpha;
use crate::core::data::curve::{CurvePoint, CurveSample, OperatorCurves};
use crate::core::data::sample_grid::SampleGrid;
use crate::core::operators::errors::OperatorError;
use crate::core::operators::fractional_integral::FractionalIntegral;
use crate::core::operators::fractional_maximal::FractionalMaximal;
use crate::core::operators::indicator::Indicator;

/// Error type for cancelable evaluation.
///
/// Cancellation is expected control flow for superseded requests and is kept
/// apart from operator failures so callers never display it.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EvaluateError {
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error("operator error: {0}")]
    Operator(#[from] OperatorError),
}

/// Evaluates one operator at every grid point, in parallel, preserving grid order.
pub fn evaluate_curve<Op: Operator>(
    grid: &SampleGrid,
    operator: &Op,
) -> Result<CurveSample, OperatorError> {
    evaluate_curve_cancelable(grid, operator, &NeverCancel).map_err(|e| match e {
        EvaluateError::Operator(err) => err,
        EvaluateError::Cancelled(_) => {
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Like [`evaluate_curve`], checking `cancel` every
/// [`CANCEL_CHECK_INTERVAL_SAMPLES`] points.
pub fn evaluate_curve_cancelable<Op, C>(
    grid: &SampleGrid,
    operator: &Op,
    cancel: &C,
) -> Result<CurveSample, EvaluateError>
where
    Op: Operator,
    C: CancelToken,
{
    let points = grid
        .points()
        .par_iter()
        .enumerate()
        .map(|(i, &x)| {
            if i % CANCEL_CHECK_INTERVAL_SAMPLES == 0 && cancel.is_cancelled() {
                return Err(EvaluateError::Cancelled(Cancelled));
            }

            let y = operator.evaluate(x)?;

            if !y.is_finite() {
                return Err(EvaluateError::Operator(OperatorError::NonFinite {
                    operator: operator.label(),
                    x,
                }));
            }

            Ok(CurvePoint { x, y })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CurveSample::new(points))
}

/// Computes the indicator, fractional integral and fractional maximal curves
/// for `alpha` over `grid`.
pub fn evaluate_operators(grid: &SampleGrid, alpha: Alpha) -> Result<OperatorCurves, OperatorError> {
    evaluate_operators_cancelable(grid, alpha, &NeverCancel).map_err(|e| match e {
        EvaluateError::Operator(err) => err,
        EvaluateError::Cancelled(_) => {
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

pub fn evaluate_operators_cancelable<C: CancelToken>(
    grid: &SampleGrid,
    alpha: Alpha,
    cancel: &C,
) -> Result<OperatorCurves, EvaluateError> {
    let indicator = evaluate_curve_cancelable(grid, &Indicator, cancel)?;
    let integral = evaluate_curve_cancelable(grid, &FractionalIntegral::new(alpha), cancel)?;
    let maximal = evaluate_curve_cancelable(grid, &FractionalMaximal::new(alpha), cancel)?;

    Ok(OperatorCurves {
        alpha,
        indicator,
        integral,
        maximal,
    })
}
