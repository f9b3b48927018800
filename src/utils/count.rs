use log::debug;

/// Number of trees the generator emits for the given set sizes and budget.
///
/// Follows the generator's recursion without building anything: every left
/// operand from budget `b - 1` is a leaf, paired with all of `b - 1`, or a
/// compound tree, paired with all of `b - 2`. Returns `None` on `u128`
/// overflow.
pub fn count_expressions(leaves: usize, operators: usize, budget: usize) -> Option<u128> {
    if budget == 0 {
        return Some(0);
    }
    // Without leaves or operators nothing compound is ever built
    if leaves == 0 || operators == 0 {
        return Some(leaves as u128);
    }

    let leaves = leaves as u128;
    let operators = operators as u128;

    // Totals for budgets b - 2 and b - 1; the count at least doubles per step,
    // so checked arithmetic fails within a handful of iterations.
    let mut before_previous: u128 = 0;
    let mut previous: u128 = 0;

    for b in 1..=budget {
        let per_operator = if b >= 2 {
            let compound = previous.checked_sub(leaves)?;
            leaves
                .checked_mul(previous)?
                .checked_add(compound.checked_mul(before_previous)?)?
        } else {
            0
        };
        let total = operators.checked_mul(per_operator)?.checked_add(leaves)?;

        debug!("Budget {} enumerates {} expressions", b, total);
        before_previous = previous;
        previous = total;
    }

    Some(previous)
}
