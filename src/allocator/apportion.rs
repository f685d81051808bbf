/// Phase A: split `total` minutes across topics in proportion to `weights`.
///
/// Every positive-weight topic first gets a floor of one granularity unit
/// (smaller if there are not enough minutes to go round, but never below one
/// minute). The rest of the pool is shared proportionally, rounded down to
/// whole units, and the residual is handed out by largest remainder with ties
/// going to the earlier topic. Each topic receives at most one residual chunk.
///
/// The result sums to exactly `total` unless there are fewer minutes than
/// positive-weight topics, in which case each still gets one minute.
pub fn apportion(total: u64, weights: &[u64], granularity: u64) -> Vec<u64> {
    let granularity = granularity.max(1);
    let positive = weights.iter().filter(|&&w| w > 0).count() as u64;
    let mut minutes = vec![0u64; weights.len()];
    if positive == 0 {
        return minutes;
    }

    let floor = (total / positive).min(granularity).max(1);
    let pool = total.saturating_sub(floor * positive);
    let weight_sum: u128 = weights.iter().map(|&w| w as u128).sum();
    let quantum = weight_sum * granularity as u128;

    let mut remainders: Vec<(usize, u128)> = Vec::with_capacity(positive as usize);
    let mut assigned = 0u64;
    for (i, &w) in weights.iter().enumerate() {
        if w == 0 {
            continue;
        }
        let share = pool as u128 * w as u128;
        // share < pool * weight_sum, so the unit count always fits back into u64
        let units = (share / quantum) as u64;
        minutes[i] = floor + units * granularity;
        assigned += units * granularity;
        remainders.push((i, share % quantum));
    }

    // stable: equal remainders keep input order
    remainders.sort_by(|a, b| b.1.cmp(&a.1));

    let mut residual = pool - assigned;
    for (i, _) in remainders {
        if residual == 0 {
            break;
        }
        let chunk = residual.min(granularity);
        minutes[i] += chunk;
        residual -= chunk;
    }

    minutes
}
