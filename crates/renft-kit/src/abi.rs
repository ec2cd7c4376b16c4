//! Solidity ABI definitions of the rental contracts.
//!
//! Only the state-changing entry points wrapped by this crate are declared.
#![allow(missing_docs)]
#![allow(clippy::too_many_arguments)]

use alloy_sol_types::sol;

sol! {
    /// Collateralised rentals. Prices are packed `bytes4`, durations are in
    /// days, payment tokens are `uint8` discriminants.
    #[sol(all_derives)]
    interface IAzrael {
        function lend(
            address[] nfts,
            uint256[] tokenIds,
            uint256[] lendAmounts,
            uint8[] maxRentDurations,
            bytes4[] dailyRentPrices,
            bytes4[] nftPrices,
            uint8[] paymentTokens
        ) external;

        function rent(
            address[] nfts,
            uint256[] tokenIds,
            uint256[] lendingIds,
            uint8[] rentDurations
        ) external payable;

        function returnIt(address[] nfts, uint256[] tokenIds, uint256[] lendingIds) external;

        function claimCollateral(address[] nfts, uint256[] tokenIds, uint256[] lendingIds) external;

        function stopLending(address[] nfts, uint256[] tokenIds, uint256[] lendingIds) external;
    }
}

sol! {
    /// Collateral-free rentals with revenue share and upfront fees.
    #[sol(all_derives)]
    interface IWhoopi {
        struct CallData {
            address nft;
            uint256[] tokenIds;
            uint256[] lendingIds;
        }

        struct RevShare {
            address[] beneficiaries;
            uint8[] portions;
        }

        function lend(
            CallData cd,
            uint256[] upfrontRentFees,
            address[][] allowedRenters,
            RevShare[] revShares,
            uint8[] maxRentDurations,
            uint8[] paymentTokens
        ) external;

        function rent(
            address[] nfts,
            uint256[] tokenIds,
            uint256[] lendingIds,
            uint8[] rentDurations
        ) external payable;

        function stopRent(address[] nfts, uint256[] tokenIds, uint256[] lendingIds) external;

        function stopLend(address[] nfts, uint256[] tokenIds, uint256[] lendingIds) external;

        function pay(
            address[] nfts,
            uint256[] tokenIds,
            uint256[] lendingIds,
            address[] renters,
            uint256[] amountsToPay
        ) external;
    }
}
