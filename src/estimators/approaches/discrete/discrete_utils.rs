// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, Array2, Axis};
use std::collections::HashMap;

use crate::error::{InfoError, Result};

/// Default logarithm base: all measures are reported in bits unless overridden.
pub const LOG_BASE: f64 = 2.0;

/// Largest joint lookup table `merge_arrays` materialises densely.
/// Bigger state products fall back to a hash map with identical output.
pub const MAX_DENSE_STATES: usize = 1 << 22;

/// Values that can be discretised into integer states.
///
/// Real values are floored, integers are taken as they are. States are `i128` so that
/// every `i64`, `u64` and `usize` value keeps its order.
///
/// `unique_key` identifies exact values for first-seen relabelling (`-0.0` and `0.0`
/// share a key). `None` marks a value equal to nothing, not even itself (NaN).
pub trait Discretise: Copy {
    fn floor_state(self) -> i128;
    fn unique_key(self) -> Option<u64>;
}

impl Discretise for f64 {
    #[inline]
    fn floor_state(self) -> i128 {
        self.floor() as i128
    }

    #[inline]
    fn unique_key(self) -> Option<u64> {
        if self.is_nan() {
            None
        } else if self == 0.0 {
            Some(0)
        } else {
            Some(self.to_bits())
        }
    }
}

impl Discretise for f32 {
    #[inline]
    fn floor_state(self) -> i128 {
        self.floor() as i128
    }

    #[inline]
    fn unique_key(self) -> Option<u64> {
        (self as f64).unique_key()
    }
}

macro_rules! impl_discretise_int {
    ($($t:ty),*) => {
        $(
            impl Discretise for $t {
                #[inline]
                fn floor_state(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn unique_key(self) -> Option<u64> {
                    Some(self as i64 as u64)
                }
            }
        )*
    };
}

impl_discretise_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

/// Integer state codes together with the size of the state space they live in.
///
/// `normalise` produces 0-based codes, `merge_arrays` and `number_of_unique_values`
/// produce 1-based codes.
#[derive(Debug, Clone, PartialEq)]
pub struct StateCodes {
    pub codes: Array1<usize>,
    pub num_states: usize,
}

impl StateCodes {
    pub fn empty() -> Self {
        Self { codes: Array1::zeros(0), num_states: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Allocate a zero-initialised buffer, reporting allocation failure instead of aborting.
pub fn checked_zeros<T: Clone + Default>(len: usize) -> Result<Vec<T>> {
    let mut buffer = checked_with_capacity(len)?;
    buffer.resize(len, T::default());
    Ok(buffer)
}

/// Allocate an empty buffer able to hold `capacity` elements without reallocating.
pub fn checked_with_capacity<T>(capacity: usize) -> Result<Vec<T>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(capacity)
        .map_err(|source| InfoError::Allocation { requested: capacity, source })?;
    Ok(buffer)
}

/// Check that all lengths agree with the first one and return it.
pub fn check_same_length(lengths: &[usize]) -> Result<usize> {
    let Some(&expected) = lengths.first() else {
        return Ok(0);
    };
    match lengths.iter().find(|&&found| found != expected) {
        Some(&found) => Err(InfoError::LengthMismatch { expected, found }),
        None => Ok(expected),
    }
}

/// Size of the Cartesian product of two state spaces.
pub fn joint_state_count(num_first_states: usize, num_second_states: usize) -> Result<usize> {
    num_first_states
        .checked_mul(num_second_states)
        .ok_or(InfoError::StateSpaceOverflow)
}

/// Map a vector onto 0-based integer states.
///
/// Every value is floored; the minimum floored value becomes state 0 and
/// `num_states = max - min + 1`. Codes depend only on the values, never on their order.
pub fn normalise<T: Discretise>(data: &Array1<T>) -> Result<StateCodes> {
    if data.is_empty() {
        return Ok(StateCodes::empty());
    }

    let mut min_v = i128::MAX;
    let mut max_v = i128::MIN;
    for &v in data.iter() {
        let state = v.floor_state();
        if state < min_v {
            min_v = state;
        }
        if state > max_v {
            max_v = state;
        }
    }

    let num_states = max_v
        .checked_sub(min_v)
        .and_then(|range| usize::try_from(range).ok())
        .and_then(|range| range.checked_add(1))
        .ok_or(InfoError::StateSpaceOverflow)?;

    let mut codes = checked_zeros::<usize>(data.len())?;
    for (code, &v) in codes.iter_mut().zip(data.iter()) {
        *code = (v.floor_state() - min_v) as usize;
    }

    Ok(StateCodes { codes: Array1::from(codes), num_states })
}

/// Relabel the distinct values of a vector by order of first appearance, starting at 1.
///
/// Values are compared exactly (no flooring), so every NaN gets a label of its own. The
/// number of labels handed out is returned as `num_states`.
pub fn number_of_unique_values<T: Discretise>(data: &Array1<T>) -> Result<StateCodes> {
    let mut labels: HashMap<u64, usize> = HashMap::new();
    let mut codes = checked_with_capacity::<usize>(data.len())?;
    let mut num_states = 0usize;
    for &v in data.iter() {
        let label = match v.unique_key() {
            Some(key) => *labels.entry(key).or_insert_with(|| {
                num_states += 1;
                num_states
            }),
            None => {
                num_states += 1;
                num_states
            }
        };
        codes.push(label);
    }
    Ok(StateCodes { codes: Array1::from(codes), num_states })
}

/// Merge two variables into one joint variable over the combinations actually observed.
///
/// Joint codes are assigned in order of first appearance starting at 1, and `num_states`
/// is the number of distinct observed combinations.
pub fn merge_arrays<A: Discretise, B: Discretise>(
    first: &Array1<A>,
    second: &Array1<B>,
) -> Result<StateCodes> {
    let len = check_same_length(&[first.len(), second.len()])?;
    let first_states = normalise(first)?;
    let second_states = normalise(second)?;
    // An overflowing product can still be merged sparsely.
    let dense_len = joint_state_count(first_states.num_states, second_states.num_states)
        .ok()
        .filter(|&table_len| table_len <= MAX_DENSE_STATES);

    let mut codes = checked_zeros::<usize>(len)?;
    let pairs = first_states.codes.iter().zip(second_states.codes.iter());
    let mut state_count = 1usize;

    if let Some(table_len) = dense_len {
        // 0 marks an index that has not been assigned a joint state yet.
        let mut state_map = checked_zeros::<usize>(table_len)?;
        for (code, (&a, &b)) in codes.iter_mut().zip(pairs) {
            let index = a + b * first_states.num_states;
            if state_map[index] == 0 {
                state_map[index] = state_count;
                state_count += 1;
            }
            *code = state_map[index];
        }
    } else {
        tracing::debug!(
            first_states = first_states.num_states,
            second_states = second_states.num_states,
            "joint state space exceeds dense limit, merging through a hash map"
        );
        let mut state_map: HashMap<(usize, usize), usize> = HashMap::new();
        for (code, (&a, &b)) in codes.iter_mut().zip(pairs) {
            *code = *state_map.entry((a, b)).or_insert_with(|| {
                let v = state_count;
                state_count += 1;
                v
            });
        }
    }

    Ok(StateCodes { codes: Array1::from(codes), num_states: state_count - 1 })
}

/// Merge two variables with declared arities into the full Cartesian joint variable.
///
/// Fails with `ArityExceeded` when either variable shows more states than declared.
/// Codes are `first + second * first_arity + 1` and `num_states` is the full product.
pub fn merge_arrays_arities<A: Discretise, B: Discretise>(
    first: &Array1<A>,
    first_arity: usize,
    second: &Array1<B>,
    second_arity: usize,
) -> Result<StateCodes> {
    let len = check_same_length(&[first.len(), second.len()])?;
    let first_states = normalise(first)?;
    let second_states = normalise(second)?;

    for (declared, observed) in [
        (first_arity, first_states.num_states),
        (second_arity, second_states.num_states),
    ] {
        if observed > declared {
            return Err(InfoError::ArityExceeded { declared, observed });
        }
    }

    let num_states = joint_state_count(first_arity, second_arity)?;
    let mut codes = checked_zeros::<usize>(len)?;
    for ((code, &a), &b) in codes
        .iter_mut()
        .zip(first_states.codes.iter())
        .zip(second_states.codes.iter())
    {
        *code = a + b * first_arity + 1;
    }

    Ok(StateCodes { codes: Array1::from(codes), num_states })
}

/// Merge every column of a (samples x variables) matrix into one joint variable.
///
/// Columns are folded left to right with `merge_arrays`. A single column is only
/// normalised and keeps the 0-based codes of `normalise`.
pub fn merge_multiple_arrays<T: Discretise>(data: &Array2<T>) -> Result<StateCodes> {
    let mut columns = data.axis_iter(Axis(1));
    let first = columns.next().ok_or(InfoError::NoVariables)?.to_owned();
    let Some(second) = columns.next() else {
        return normalise(&first);
    };

    let mut merged = merge_arrays(&first, &second.to_owned())?;
    for column in columns {
        merged = merge_arrays(&merged.codes, &column.to_owned())?;
    }
    Ok(merged)
}

/// Fold `merge_arrays_arities` over the columns of a matrix.
///
/// The running joint variable carries the product of the arities merged so far, so the
/// result has `num_states` equal to the product of all declared arities. A single column
/// is only normalised: its arity is not consulted and `num_states` is the observed range.
pub fn merge_multiple_arrays_arities<T: Discretise>(
    data: &Array2<T>,
    arities: &[usize],
) -> Result<StateCodes> {
    check_same_length(&[data.ncols(), arities.len()])?;
    let mut columns = data.axis_iter(Axis(1)).zip(arities.iter().copied());
    let (first, first_arity) = columns.next().ok_or(InfoError::NoVariables)?;
    let first = first.to_owned();

    let Some((second, second_arity)) = columns.next() else {
        return normalise(&first);
    };

    let mut merged = merge_arrays_arities(&first, first_arity, &second.to_owned(), second_arity)?;
    for (column, arity) in columns {
        merged = merge_arrays_arities(&merged.codes, merged.num_states, &column.to_owned(), arity)?;
    }
    Ok(merged)
}
