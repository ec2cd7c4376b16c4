//! Shared helpers for the integration suite.

use std::sync::{Arc, Mutex, Once};

use alloy::rpc::types::TransactionRequest;
use alloy_primitives::{Address, Bytes, U256, keccak256};
use renft_kit::*;

/// Address the recorder reports as the sender.
pub const SENDER: Address = Address::repeat_byte(0xee);

/// A transaction handed to the recorder.
#[derive(Clone, Debug)]
pub struct Sent {
    pub to: Option<Address>,
    pub input: Bytes,
    pub value: Option<U256>,
    pub gas: Option<u64>,
}

/// Submitter that keeps every request in memory.
#[derive(Clone, Default)]
pub struct Recorder {
    sent: Arc<Mutex<Vec<Sent>>>,
}

impl Recorder {
    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last(&self) -> Sent {
        self.sent().pop().expect("nothing was submitted")
    }
}

impl Submitter for Recorder {
    fn sender(&self) -> Option<Address> {
        Some(SENDER)
    }

    fn submit(&self, tx: TransactionRequest) -> SubmitFuture<'_> {
        Box::pin(async move {
            let input = tx.input.input().cloned().unwrap_or_default();
            let hash = keccak256(&input);
            self.sent.lock().unwrap().push(Sent {
                to: tx.to.and_then(|kind| kind.to().copied()),
                input,
                value: tx.value,
                gas: tx.gas,
            });
            Ok(PendingTx::from_hash(hash))
        })
    }
}

/// A client on `network` backed by a fresh recorder.
pub fn recording_client(network: Network) -> (Renft, Recorder) {
    init_tracing();
    let recorder = Recorder::default();
    (Renft::with_submitter(network, recorder.clone()), recorder)
}

/// Install a test subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
