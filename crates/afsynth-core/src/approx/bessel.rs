//! Bessel (maximally flat group delay) approximation
//!
//! The order is given by the caller; poles come from the precomputed table
//! and are put through the canonical reorder.

use super::PoleZeroSet;
use crate::bessel_table;
use crate::error::SynthResult;
use crate::reform::reform;
use crate::types::Complex;

pub fn synthesize(order: i32) -> SynthResult<PoleZeroSet> {
    let row = bessel_table::poles(order)?;
    let mut poles: Vec<Complex> = row.iter().map(|&(re, im)| Complex::new(re, im)).collect();
    reform(&mut poles);
    Ok(PoleZeroSet::all_pole(poles))
}
