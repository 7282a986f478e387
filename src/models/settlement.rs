//! Settlement calculator
//!
//! Turns one raw daily entry into the fully reconciled owner/driver
//! breakdown. The calculation is a pure projection: it reads the entry,
//! allocates nothing shared, performs no I/O, and always produces a
//! result. Negative outcomes (a day where fuel cost exceeded gross) are
//! valid business results, not errors.
//!
//! Calculation order:
//! 1. Net earnings = gross - CNG
//! 2. Base 50-50 split of net
//! 3. Online total = sum of the amendment ledger
//! 4. The driver pass is purchased from online-channel funds, so the net
//!    online settlement = online total - pass amount (when the pass was
//!    used)
//! 5. The owner held money that belongs to the driver: subtract the net
//!    online settlement from the owner's share, add it to the driver's.
//!    This transfer is zero-sum by construction.
//! 6. The pass itself is a shared expense, half charged to each party.
//!
//! Steps must run in this order: the sign convention in step 5 assumes
//! step 4 already netted the pass cost out of the online total.

use serde::{Deserialize, Serialize};

use super::entry::Entry;

/// The fully derived settlement breakdown for one entry.
///
/// Never persisted; recomputed from the owning [`Entry`] on every read so
/// it cannot drift out of sync with its source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    /// Gross earnings minus CNG cost; may be negative, never clamped
    pub net_earnings: f64,

    /// Sum of all online amendment amounts
    pub online_total: f64,

    /// Online total minus the pass amount when the pass was used
    pub net_online_settlement: f64,

    /// Owner's half of net earnings before any reconciliation
    pub base_owner_share: f64,

    /// Driver's half of net earnings before any reconciliation
    pub base_driver_share: f64,

    /// Owner share after handing over online-channel money
    pub owner_after_online: f64,

    /// Driver share after receiving online-channel money
    pub driver_after_online: f64,

    /// Owner's half of the pass cost (0 when no pass)
    pub owner_pass_contribution: f64,

    /// Driver's half of the pass cost (0 when no pass)
    pub driver_pass_contribution: f64,

    /// Final amount owed to the owner for the day
    pub final_owner_earnings: f64,

    /// Final amount owed to the driver for the day
    pub final_driver_earnings: f64,

    /// Kilometers driven; negative when the odometer readings are
    /// inconsistent (flagged by the display layer, not rejected)
    pub km_distance: f64,
}

impl Settlement {
    /// Compute the settlement breakdown for an entry
    pub fn of(entry: &Entry) -> Self {
        // Step 1: net earnings before adjustments
        let net_earnings = entry.gross_earnings - entry.cng;

        // Step 2: base 50-50 split
        let base_owner_share = net_earnings * 0.5;
        let base_driver_share = net_earnings * 0.5;

        // Step 3: online total from the amendment ledger
        let online_total = entry.online_amendments.total();

        // Step 4: the pass is paid for out of online money
        let net_online_settlement = online_total - entry.effective_pass_amount();

        // Step 5: hand the netted online money from owner to driver
        let owner_after_online = base_owner_share - net_online_settlement;
        let driver_after_online = base_driver_share + net_online_settlement;

        // Step 6: the pass cost is split equally
        let (owner_pass_contribution, driver_pass_contribution) =
            if entry.driver_pass_used && entry.driver_pass_amount > 0.0 {
                let half = entry.driver_pass_amount * 0.5;
                (half, half)
            } else {
                (0.0, 0.0)
            };

        let final_owner_earnings = owner_after_online - owner_pass_contribution;
        let final_driver_earnings = driver_after_online - driver_pass_contribution;

        let km_distance = entry.km_end - entry.km_start;

        Self {
            net_earnings,
            online_total,
            net_online_settlement,
            base_owner_share,
            base_driver_share,
            owner_after_online,
            driver_after_online,
            owner_pass_contribution,
            driver_pass_contribution,
            final_owner_earnings,
            final_driver_earnings,
            km_distance,
        }
    }
}
