//! # Pivot rules
//!
//! Strategies for choosing the column that enters the basis in the primal simplex method.
use crate::algorithm::two_phase::tableau::inverse_maintenance::InverseMaintenance;
use crate::algorithm::two_phase::tableau::Tableau;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. This decision is made by the
/// ratio test of the tableau, independent of the strategy.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// Index of a non basic column with a negative relative cost and that cost, or `None` if no
    /// such column exists (the current basis is optimal).
    fn select_primal_pivot_column<IM: InverseMaintenance>(
        &mut self,
        tableau: &Tableau<IM>,
    ) -> Option<(usize, f64)>;
}

/// Bland's rule: pivot on the first column which has a negative relative cost.
///
/// Terminates on degenerate problems where `SteepestDescentAlongVariable` may cycle.
pub struct FirstProfitable;

impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<IM: InverseMaintenance>(
        &mut self,
        tableau: &Tableau<IM>,
    ) -> Option<(usize, f64)> {
        let relative_costs = tableau.relative_costs();

        (0..tableau.nr_columns())
            .filter(|&column| !tableau.is_in_basis(column))
            .map(|column| (column, relative_costs[column]))
            .find(|&(_, cost)| cost < -tableau.epsilon())
    }
}

/// Dantzig's rule: pivot on the column which has the most negative relative cost.
///
/// Ties are broken by taking the lowest index. Usually needs fewer iterations than
/// `FirstProfitable`, but may cycle on degenerate problems.
pub struct SteepestDescentAlongVariable;

impl PivotRule for SteepestDescentAlongVariable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<IM: InverseMaintenance>(
        &mut self,
        tableau: &Tableau<IM>,
    ) -> Option<(usize, f64)> {
        let relative_costs = tableau.relative_costs();

        let mut smallest: Option<(usize, f64)> = None;
        for (j, cost) in (0..tableau.nr_columns())
            .filter(|&column| !tableau.is_in_basis(column))
            .map(|column| (column, relative_costs[column]))
            .filter(|&(_, cost)| cost < -tableau.epsilon()) {
            if smallest.is_none_or(|(_, existing_cost)| cost < existing_cost) {
                smallest = Some((j, cost));
            }
        }

        smallest
    }
}
