use crate as pallet_leveraged_token;
use frame_support::{
    assert_ok, derive_impl, parameter_types,
    traits::{ConstU32, ConstU64},
    PalletId,
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Whitelist: pallet_whitelist,
        LeveragedToken: pallet_leveraged_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

impl pallet_whitelist::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type MaxBatchSize = ConstU32<16>;
    type WeightInfo = ();
}

parameter_types! {
    pub const LeveragedTokenPalletId: PalletId = PalletId(*b"py/lvtkn");
}

impl pallet_leveraged_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Whitelist = Whitelist;
    type PalletId = LeveragedTokenPalletId;
    type WeightInfo = ();
}

/// Deployer: owner, and genesis minter and burner.
pub const OWNER: u64 = 1;
pub const MINTER: u64 = 2;
pub const BURNER: u64 = 3;
pub const ALICE: u64 = 4;
pub const BOB: u64 = 5;
/// Never whitelisted and holds no role.
pub const MALLORY: u64 = 6;

/// Whitelist created at genesis holding every named account except `MALLORY`.
pub const DEFAULT_WHITELIST: u32 = 0;

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_whitelist::GenesisConfig::<Test> {
        whitelists: vec![(OWNER, vec![OWNER, MINTER, BURNER, ALICE, BOB])],
    }
    .assimilate_storage(&mut t)
    .unwrap();

    pallet_leveraged_token::GenesisConfig::<Test> {
        owner: Some(OWNER),
        token_name: b"Test Leveraged Token".to_vec(),
        token_symbol: b"TEST".to_vec(),
        underlying: b"BTC".to_vec(),
        decimals: 3,
        minters: vec![OWNER],
        burners: vec![OWNER],
        initial_balances: vec![],
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| {
        System::set_block_number(1);
        assert_ok!(LeveragedToken::set_whitelist(RuntimeOrigin::signed(OWNER), DEFAULT_WHITELIST));
        assert_ok!(LeveragedToken::add_minter(RuntimeOrigin::signed(OWNER), MINTER));
        assert_ok!(LeveragedToken::add_burner(RuntimeOrigin::signed(OWNER), BURNER));
    });
    ext
}

/// Genesis state without an active whitelist or delegated roles.
pub fn new_bare_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_leveraged_token::GenesisConfig::<Test> {
        owner: Some(OWNER),
        token_name: b"Bare".to_vec(),
        token_symbol: b"BARE".to_vec(),
        underlying: b"ETH".to_vec(),
        decimals: 18,
        minters: vec![MINTER],
        burners: vec![BURNER],
        initial_balances: vec![(ALICE, 700), (BOB, 300), (ALICE, 50)],
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}

/// Balance held by the ledger's own account.
pub fn vault() -> u64 {
    LeveragedToken::account_id()
}
