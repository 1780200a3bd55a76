//! Token contract interfaces.
//!
//! The stablecoin and wrapped-native token expose the standard
//! fungible-token surface; the wrapped-native contract additionally
//! has a payable, zero-argument `deposit` that mints wrapped tokens
//! for the attached value.

use alloy::sol;

sol! {
    /// Minimal ERC-20 surface used by the funder.
    #[sol(rpc)]
    interface IERC20 {
        function balanceOf(address account) external view returns (uint256);
        function transfer(address to, uint256 amount) external returns (bool);
    }

    /// Wrapped-native deposit entry point.
    #[sol(rpc)]
    interface IWeth {
        function deposit() external payable;
    }
}
