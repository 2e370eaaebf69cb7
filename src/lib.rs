// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mooring-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mooring and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mooring — anchor-point resolution for node-link diagram canvases.
//!
//! Geometry classification, handle mapping, the condition-branch policy and
//! the session-scoped connection registry; see [`resolve`] for the entry
//! point a canvas calls from its drag handlers.

pub mod geometry;
pub mod model;
pub mod policy;
pub mod registry;
pub mod resolve;

#[cfg(test)]
mod tests {
    #[test]
    fn sanity() {
        assert_eq!(2 + 2, 4);
    }
}
