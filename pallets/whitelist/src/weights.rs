//! Weights for pallet-whitelist.
//!
//! Hand-estimated from storage access counts; regenerate from `benchmarking.rs`
//! with `frame-omni-bencher` before production use.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

pub trait WeightInfo {
    fn create_whitelist() -> Weight;
    fn add_whitelisted() -> Weight;
    fn remove_whitelisted() -> Weight;
    fn batch_add_whitelisted(n: u32) -> Weight;
    fn add_whitelist_admin() -> Weight;
    fn renounce_whitelist_admin() -> Weight;
}

/// Weights scaled by the runtime's database weight.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    fn create_whitelist() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(1, 3))
    }
    fn add_whitelisted() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    fn remove_whitelisted() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    fn batch_add_whitelisted(n: u32) -> Weight {
        Weight::from_parts(10_000_000, 0)
            .saturating_add(Weight::from_parts(3_000_000, 0).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(n.into()))
    }
    fn add_whitelist_admin() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    fn renounce_whitelist_admin() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
}

// For tests and mocks
impl WeightInfo for () {
    fn create_whitelist() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(1, 3))
    }
    fn add_whitelisted() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn remove_whitelisted() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn batch_add_whitelisted(n: u32) -> Weight {
        Weight::from_parts(10_000_000, 0)
            .saturating_add(Weight::from_parts(3_000_000, 0).saturating_mul(n.into()))
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(n.into()))
    }
    fn add_whitelist_admin() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn renounce_whitelist_admin() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
}
