use alloy_primitives::{Address, U256};
use custody_crypto::{SignatureBatch, ThresholdSignatureError};
use custody_operator::{FundOperator, OperatorError, OperatorEvent};
use custody_operator_txs::actions::{TransferNative, TransferToken};
use custody_test_utils::{FUND, MockCustody, OperatorFixture, Signer};

const HOT_A: Address = Address::with_last_byte(1);
const HOT_B: Address = Address::with_last_byte(2);
const TRUSTED: Address = Address::with_last_byte(3);
const COLD: Address = Address::with_last_byte(4);
const EXTERNAL: Address = Address::repeat_byte(0xEE);
const TOKEN: Address = Address::repeat_byte(0x70);

struct Setup {
    fx: OperatorFixture,
    op: FundOperator<MockCustody>,
    cold_key: Signer,
}

/// One operational signature and one trust-party signature per trust action.
/// Two hot wallets, one trusted wallet and one cold wallet are registered.
fn setup() -> Setup {
    let fx = OperatorFixture::new(3, 1, 3, 1);
    let cold_key = Signer::from_seed(200);
    let env = fx
        .custody()
        .with_wallet(HOT_A, FUND)
        .with_wallet(HOT_B, FUND)
        .with_wallet(TRUSTED, FUND)
        .with_wallet(COLD, FUND)
        .with_native(HOT_A, U256::from(100))
        .with_native(TRUSTED, U256::from(10))
        .with_native(COLD, U256::from(50))
        .with_token_balance(TOKEN, HOT_A, U256::from(1_000))
        .with_token_balance(TOKEN, COLD, U256::from(1_000));

    let mut op = fx.operator(env);
    fx.register_fund(&mut op);
    fx.register_wallets(&mut op, &[HOT_A, HOT_B], true);
    fx.register_wallets(&mut op, &[TRUSTED], false);
    fx.register_cold(&mut op, COLD, &cold_key);
    assert_eq!(op.nonce(), 4);

    Setup { fx, op, cold_key }
}

fn threshold_err(err: ThresholdSignatureError) -> OperatorError {
    OperatorError::from(err)
}

#[test]
fn test_hot_to_hot_exact_balance() {
    let Setup { fx, mut op, .. } = setup();

    let action = TransferNative::new(HOT_A, HOT_B, U256::from(100));
    let sigs = fx.sign(&action, 4, &fx.hot_signers(1));
    let receipt = op.transfer_native(&action, 4, &sigs).unwrap();

    assert_eq!(receipt.nonce, 4);
    assert_eq!(
        receipt.event,
        OperatorEvent::NativeTransferAuthorized {
            from: HOT_A,
            to: HOT_B,
            value: U256::from(100),
        }
    );
    assert_eq!(op.env().native_of(&HOT_A), U256::ZERO);
    assert_eq!(op.env().native_of(&HOT_B), U256::from(100));

    // The balance check comes before signature verification.
    let overdraw = TransferNative::new(HOT_A, HOT_B, U256::from(1));
    assert_eq!(
        op.transfer_native(&overdraw, 5, &SignatureBatch::empty())
            .unwrap_err(),
        OperatorError::InsufficientBalance {
            wallet: HOT_A,
            available: U256::ZERO,
            requested: U256::from(1),
        }
    );
    assert_eq!(op.nonce(), 5);
}

#[test]
fn test_overdraw_reported_before_bad_signatures() {
    let Setup { fx, mut op, .. } = setup();

    let action = TransferNative::new(HOT_A, HOT_B, U256::from(101));
    let sigs = fx.sign(&action, 4, &fx.trust_signers(2));
    assert_eq!(
        op.transfer_native(&action, 4, &sigs).unwrap_err(),
        OperatorError::InsufficientBalance {
            wallet: HOT_A,
            available: U256::from(100),
            requested: U256::from(101),
        }
    );
    assert_eq!(op.env().sends(), 0);
}

#[test]
fn test_hot_to_trusted_needs_only_hot_signatures() {
    let Setup { fx, mut op, .. } = setup();

    for (nonce, to) in [(4, TRUSTED), (5, COLD), (6, FUND)] {
        let action = TransferNative::new(HOT_A, to, U256::from(10));
        let sigs = fx.sign(&action, nonce, &fx.hot_signers(1));
        op.transfer_native(&action, nonce, &sigs).unwrap();
    }

    // More operational signatures than the threshold are accepted.
    let action = TransferNative::new(HOT_A, HOT_B, U256::from(10));
    let sigs = fx.sign(&action, 7, &fx.hot_signers(3));
    op.transfer_native(&action, 7, &sigs).unwrap();

    assert_eq!(op.env().native_of(&HOT_A), U256::from(60));
    assert_eq!(op.env().native_of(&TRUSTED), U256::from(20));
    assert_eq!(op.env().native_of(&COLD), U256::from(60));
    assert_eq!(op.env().native_of(&FUND), U256::from(10));
}

#[test]
fn test_hot_to_external_needs_trust_segment() {
    let Setup { fx, mut op, .. } = setup();
    let action = TransferNative::new(HOT_A, EXTERNAL, U256::from(40));

    let sigs = fx.sign(&action, 4, &fx.hot_signers(1));
    assert_eq!(
        op.transfer_native(&action, 4, &sigs).unwrap_err(),
        threshold_err(ThresholdSignatureError::InsufficientSignatures {
            provided: 0,
            required: 1,
        })
    );
    assert_eq!(op.nonce(), 4);
    assert_eq!(op.env().native_of(&EXTERNAL), U256::ZERO);

    // Trailing signatures after the trust segment are not ignored.
    let mut padded = fx.trust_action_signers();
    padded.push(fx.hot[1].clone());
    let sigs = fx.sign(&action, 4, &padded);
    assert_eq!(
        op.transfer_native(&action, 4, &sigs).unwrap_err(),
        threshold_err(ThresholdSignatureError::UnexpectedSignatures {
            expected: 2,
            provided: 3,
        })
    );

    let sigs = fx.sign(&action, 4, &fx.trust_action_signers());
    op.transfer_native(&action, 4, &sigs).unwrap();
    assert_eq!(op.env().native_of(&EXTERNAL), U256::from(40));
    assert_eq!(op.nonce(), 5);
}

#[test]
fn test_trust_segment_order_is_fixed() {
    let Setup { fx, mut op, .. } = setup();
    let action = TransferNative::new(HOT_A, EXTERNAL, U256::from(1));

    // Trust key first, hot key second.
    let mut swapped = fx.trust_signers(1);
    swapped.extend(fx.hot_signers(1));
    let sigs = fx.sign(&action, 4, &swapped);
    assert_eq!(
        op.transfer_native(&action, 4, &sigs).unwrap_err(),
        threshold_err(ThresholdSignatureError::UnauthorizedSigner {
            index: 0,
            signer: fx.trust[0].address,
        })
    );
}

#[test]
fn test_cold_source_needs_bound_key() {
    let Setup {
        fx,
        mut op,
        cold_key,
    } = setup();
    let action = TransferNative::new(COLD, HOT_B, U256::from(50));

    let sigs = fx.sign(&action, 4, &fx.hot_signers(1));
    assert_eq!(
        op.transfer_native(&action, 4, &sigs).unwrap_err(),
        threshold_err(ThresholdSignatureError::InsufficientSignatures {
            provided: 0,
            required: 1,
        })
    );

    let sigs = fx.sign(&action, 4, &fx.trust_action_signers());
    assert_eq!(
        op.transfer_native(&action, 4, &sigs).unwrap_err(),
        threshold_err(ThresholdSignatureError::InsufficientSignatures {
            provided: 0,
            required: 1,
        })
    );

    let impostor = Signer::from_seed(201);
    let mut signers = fx.trust_action_signers();
    signers.push(impostor.clone());
    let sigs = fx.sign(&action, 4, &signers);
    assert_eq!(
        op.transfer_native(&action, 4, &sigs).unwrap_err(),
        threshold_err(ThresholdSignatureError::UnauthorizedSigner {
            index: 2,
            signer: impostor.address,
        })
    );
    assert_eq!(op.env().native_of(&COLD), U256::from(50));

    let mut signers = fx.trust_action_signers();
    signers.push(cold_key);
    let sigs = fx.sign(&action, 4, &signers);
    op.transfer_native(&action, 4, &sigs).unwrap();

    assert_eq!(op.env().native_of(&COLD), U256::ZERO);
    assert_eq!(op.env().native_of(&HOT_B), U256::from(50));
}

#[test]
fn test_cold_to_external_uses_cold_policy() {
    let Setup {
        fx,
        mut op,
        cold_key,
    } = setup();
    let action = TransferNative::new(COLD, EXTERNAL, U256::from(5));

    let mut signers = fx.trust_action_signers();
    signers.push(cold_key);
    let sigs = fx.sign(&action, 4, &signers);
    op.transfer_native(&action, 4, &sigs).unwrap();

    assert_eq!(op.env().native_of(&EXTERNAL), U256::from(5));
}

#[test]
fn test_untrusted_sources_rejected() {
    let Setup { fx, mut op, .. } = setup();

    for source in [TRUSTED, EXTERNAL] {
        let action = TransferNative::new(source, HOT_B, U256::from(1));
        let sigs = fx.sign(&action, 4, &fx.trust_action_signers());
        assert_eq!(
            op.transfer_native(&action, 4, &sigs).unwrap_err(),
            OperatorError::UntrustedSource(source)
        );
    }

    assert_eq!(op.nonce(), 4);
    assert_eq!(op.env().native_of(&TRUSTED), U256::from(10));
}

#[test]
fn test_zero_recipient_rejected() {
    let Setup { fx, mut op, .. } = setup();

    let action = TransferNative::new(HOT_A, Address::ZERO, U256::from(1));
    let sigs = fx.sign(&action, 4, &fx.trust_action_signers());
    assert_eq!(
        op.transfer_native(&action, 4, &sigs).unwrap_err(),
        OperatorError::ZeroAddress("recipient")
    );
}

#[test]
fn test_signature_over_other_amount_rejected() {
    let Setup { fx, mut op, .. } = setup();

    let signed = TransferNative::new(HOT_A, HOT_B, U256::from(1));
    let submitted = TransferNative::new(HOT_A, HOT_B, U256::from(99));
    let sigs = fx.sign(&signed, 4, &fx.hot_signers(1));

    let err = op.transfer_native(&submitted, 4, &sigs).unwrap_err();
    assert!(matches!(
        err,
        OperatorError::ThresholdSignature(ThresholdSignatureError::UnauthorizedSigner {
            index: 0,
            ..
        })
    ));
    assert_eq!(op.env().native_of(&HOT_B), U256::ZERO);
}

#[test]
fn test_token_transfers_follow_native_routing() {
    let Setup {
        fx,
        mut op,
        cold_key,
    } = setup();

    // Hot to trusted.
    let action = TransferToken::new(TOKEN, HOT_A, TRUSTED, U256::from(300));
    let sigs = fx.sign(&action, 4, &fx.hot_signers(1));
    let receipt = op.transfer_token(&action, 4, &sigs).unwrap();
    assert_eq!(
        receipt.event,
        OperatorEvent::TokenTransferAuthorized {
            token: TOKEN,
            from: HOT_A,
            to: TRUSTED,
            value: U256::from(300),
        }
    );

    // Hot to external.
    let action = TransferToken::new(TOKEN, HOT_A, EXTERNAL, U256::from(200));
    let sigs = fx.sign(&action, 5, &fx.hot_signers(1));
    assert_eq!(
        op.transfer_token(&action, 5, &sigs).unwrap_err(),
        threshold_err(ThresholdSignatureError::InsufficientSignatures {
            provided: 0,
            required: 1,
        })
    );
    let sigs = fx.sign(&action, 5, &fx.trust_action_signers());
    op.transfer_token(&action, 5, &sigs).unwrap();

    // Cold to hot.
    let action = TransferToken::new(TOKEN, COLD, HOT_B, U256::from(1_000));
    let mut signers = fx.trust_action_signers();
    signers.push(cold_key);
    let sigs = fx.sign(&action, 6, &signers);
    op.transfer_token(&action, 6, &sigs).unwrap();

    // Trusted source.
    let action = TransferToken::new(TOKEN, TRUSTED, HOT_B, U256::from(1));
    let sigs = fx.sign(&action, 7, &fx.trust_action_signers());
    assert_eq!(
        op.transfer_token(&action, 7, &sigs).unwrap_err(),
        OperatorError::UntrustedSource(TRUSTED)
    );

    let env = op.env();
    assert_eq!(env.token_of(&TOKEN, &HOT_A), U256::from(500));
    assert_eq!(env.token_of(&TOKEN, &TRUSTED), U256::from(300));
    assert_eq!(env.token_of(&TOKEN, &EXTERNAL), U256::from(200));
    assert_eq!(env.token_of(&TOKEN, &COLD), U256::ZERO);
    assert_eq!(env.token_of(&TOKEN, &HOT_B), U256::from(1_000));
    assert_eq!(env.native_of(&HOT_A), U256::from(100));
    assert_eq!(op.nonce(), 7);
}

#[test]
fn test_token_transfer_preconditions() {
    let Setup { fx, mut op, .. } = setup();

    let action = TransferToken::new(TOKEN, HOT_A, HOT_B, U256::from(1_001));
    let sigs = fx.sign(&action, 4, &fx.hot_signers(1));
    assert_eq!(
        op.transfer_token(&action, 4, &sigs).unwrap_err(),
        OperatorError::InsufficientBalance {
            wallet: HOT_A,
            available: U256::from(1_000),
            requested: U256::from(1_001),
        }
    );

    let action = TransferToken::new(Address::ZERO, HOT_A, HOT_B, U256::from(1));
    let sigs = fx.sign(&action, 4, &fx.hot_signers(1));
    assert_eq!(
        op.transfer_token(&action, 4, &sigs).unwrap_err(),
        OperatorError::ZeroAddress("token")
    );

    // A different token has its own balance.
    let other = Address::repeat_byte(0x71);
    let action = TransferToken::new(other, HOT_A, HOT_B, U256::from(1));
    let sigs = fx.sign(&action, 4, &fx.hot_signers(1));
    assert_eq!(
        op.transfer_token(&action, 4, &sigs).unwrap_err(),
        OperatorError::InsufficientBalance {
            wallet: HOT_A,
            available: U256::ZERO,
            requested: U256::from(1),
        }
    );

    assert_eq!(op.env().sends(), 0);
    assert_eq!(op.nonce(), 4);
}

#[test]
fn test_zero_value_transfer_allowed() {
    let Setup { fx, mut op, .. } = setup();

    let action = TransferNative::new(HOT_B, HOT_A, U256::ZERO);
    let sigs = fx.sign(&action, 4, &fx.hot_signers(1));
    op.transfer_native(&action, 4, &sigs).unwrap();

    assert_eq!(op.env().sends(), 1);
    assert_eq!(op.nonce(), 5);
}
