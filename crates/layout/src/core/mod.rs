use std::{sync::Arc, time::Instant};

use alloy::primitives::{Address, U256};
use colored::Colorize;
use futures::{future, stream, StreamExt, TryStreamExt};
use serde::{Deserialize, Serialize};
use storagoor_common::{
    constants::MAX_LAYOUT_SLOTS,
    ether::{
        address::parse_address,
        chains::ChainId,
        format::{format_word, FormattedView},
        reader::{RpcStorageReader, StorageReader},
        word::{word_from_u256, Word},
    },
    utils::hex::ToLowerHex,
};
use storagoor_slot::parse_slot_index;
use tracing::{debug, info};

use crate::{error::Error, interfaces::LayoutArgs};

/// One populated slot of a layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutEntry {
    /// The slot index
    pub index: U256,
    /// The storage key, the padded index
    pub slot: Word,
    /// The raw value
    pub value: Word,
    /// The interpretations of `value`
    pub formatted: FormattedView,
}

/// The populated slots of a contiguous range, in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// The contract that was read
    pub contract: Address,
    /// The chain the contract was read on
    pub chain: ChainId,
    /// The slots that returned a value
    pub entries: Vec<LayoutEntry>,
}

impl LayoutResult {
    /// Print the layout to stdout.
    pub fn display(&self) {
        println!("{} {}", "Contract:".dimmed(), self.contract.to_lower_hex());
        println!("{} {}", "Chain:".dimmed(), self.chain);

        if self.entries.is_empty() {
            println!("{}", "No populated slots in range.".yellow());
            return;
        }

        for entry in &self.entries {
            println!();
            println!("{} {}", "Slot".bold().bright_white(), entry.index);
            println!("  {:<9} {}", "Hex:".dimmed(), entry.formatted.hex);
            println!("  {:<9} {}", "Decimal:".dimmed(), entry.formatted.decimal);
            println!("  {:<9} {}", "String:".dimmed(), entry.formatted.string);
            println!("  {:<9} {}", "Address:".dimmed(), entry.formatted.address);
        }
    }

    /// Render the layout as CSV lines, header first.
    pub fn to_csv(&self) -> Vec<String> {
        let mut lines = vec!["slot,hex,decimal,string,address".to_string()];
        lines.extend(self.entries.iter().map(|entry| {
            [
                entry.index.to_string(),
                entry.formatted.hex.clone(),
                entry.formatted.decimal.clone(),
                csv_field(&entry.formatted.string),
                csv_field(&entry.formatted.address),
            ]
            .join(",")
        }));
        lines
    }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Reads the `count` direct slots starting at `from`, with at most `threads` reads in flight.
///
/// Entries come back in ascending slot order whatever order the reads finish in. Slots that read
/// as no value are left out, and any failed read fails the whole layout.
pub async fn read_layout<R: StorageReader + ?Sized + 'static>(
    reader: Arc<R>,
    contract: &str,
    chain: ChainId,
    from: U256,
    count: u64,
    threads: usize,
) -> Result<LayoutResult, Error> {
    let contract = parse_address(contract)?;
    if threads == 0 {
        return Err(Error::Validation("threads must be at least 1".to_string()));
    }
    if count > MAX_LAYOUT_SLOTS {
        return Err(Error::Validation(format!(
            "cannot read {count} slots in one layout, the limit is {MAX_LAYOUT_SLOTS}"
        )));
    }
    if count > 0 && from.checked_add(U256::from(count - 1)).is_none() {
        return Err(Error::Validation(format!(
            "slot range starting at {from} with {count} slots overflows 2^256"
        )));
    }
    debug!("reading {} slots of {} starting at {}", count, contract, from);

    let start_time = Instant::now();

    // `buffered` yields in input order, and collecting stops pulling new reads at the first error
    let entries = stream::iter(0..count)
        .map(|offset| {
            let reader = reader.clone();
            let index = from + U256::from(offset);
            async move {
                let slot = word_from_u256(index);
                let value = reader.get_storage_at(contract, slot, chain).await?;
                debug!("read slot {}", index);

                Ok::<_, Error>(value.map(|value| LayoutEntry {
                    index,
                    slot,
                    value,
                    formatted: format_word(&value),
                }))
            }
        })
        .buffered(threads)
        .try_filter_map(|entry| future::ok(entry))
        .try_collect::<Vec<_>>()
        .await?;

    info!(
        "read {} slots in {:?}, {} populated",
        count,
        start_time.elapsed(),
        entries.len()
    );
    Ok(LayoutResult { contract, chain, entries })
}

/// Reads the slot range described by `args` over JSON-RPC.
pub async fn layout(args: LayoutArgs) -> Result<LayoutResult, Error> {
    let chain = match args.chain.trim() {
        "" => ChainId::default(),
        chain => chain.parse::<ChainId>()?,
    };
    let from = parse_slot_index(&args.from)?;

    let reader = Arc::new(RpcStorageReader::for_chain(chain, &args.rpc_url));
    read_layout(reader, &args.target, chain, from, args.count, args.threads).await
}
