//! Role-based permissions for the customer site and warehouse console

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Customer,
    WarehouseStaff,
    Admin,
}

impl Role {
    /// Parse a stored role name; unknown names get no access at all
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "customer" => Some(Self::Customer),
            "warehouse_staff" | "staff" => Some(Self::WarehouseStaff),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::WarehouseStaff => "warehouse_staff",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ViewOwnPackages,
    RequestShipment,
    ReceivePackages,
    UpdatePackageStatus,
    CreateShipments,
    UpdateShipmentStatus,
    PrintLabels,
    ManageUsers,
    ManageRates,
}

/// Guarded sections of the applications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Area {
    /// Customer account pages
    Account,
    /// Warehouse operations console
    Warehouse,
    /// User and rate administration
    Admin,
}

const CUSTOMER_PERMISSIONS: &[Permission] =
    &[Permission::ViewOwnPackages, Permission::RequestShipment];

const STAFF_PERMISSIONS: &[Permission] = &[
    Permission::ReceivePackages,
    Permission::UpdatePackageStatus,
    Permission::CreateShipments,
    Permission::UpdateShipmentStatus,
    Permission::PrintLabels,
];

const ADMIN_PERMISSIONS: &[Permission] = &[
    Permission::ViewOwnPackages,
    Permission::RequestShipment,
    Permission::ReceivePackages,
    Permission::UpdatePackageStatus,
    Permission::CreateShipments,
    Permission::UpdateShipmentStatus,
    Permission::PrintLabels,
    Permission::ManageUsers,
    Permission::ManageRates,
];

pub fn role_permissions(role: Role) -> &'static [Permission] {
    match role {
        Role::Customer => CUSTOMER_PERMISSIONS,
        Role::WarehouseStaff => STAFF_PERMISSIONS,
        Role::Admin => ADMIN_PERMISSIONS,
    }
}

pub fn has_permission(role: Role, permission: Permission) -> bool {
    role_permissions(role).contains(&permission)
}

/// Roles allowed into an area
pub fn area_roles(area: Area) -> &'static [Role] {
    match area {
        Area::Account => &[Role::Customer, Role::Admin],
        Area::Warehouse => &[Role::WarehouseStaff, Role::Admin],
        Area::Admin => &[Role::Admin],
    }
}

/// Guard check for a possibly missing role (signed out or unknown role)
pub fn can_access(role: Option<Role>, area: Area) -> bool {
    match role {
        Some(role) => area_roles(area).contains(&role),
        None => {
            log::debug!("🔒 Denied {:?} to a session without a known role", area);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roles() {
        assert_eq!(Role::parse("Admin"), Some(Role::Admin));
        assert_eq!(Role::parse("staff"), Some(Role::WarehouseStaff));
        assert_eq!(Role::parse("warehouse_staff"), Some(Role::WarehouseStaff));
        assert_eq!(Role::parse("superuser"), None);
    }

    #[test]
    fn test_admin_has_every_permission() {
        for role in [Role::Customer, Role::WarehouseStaff] {
            for permission in role_permissions(role) {
                assert!(has_permission(Role::Admin, *permission));
            }
        }
    }

    #[test]
    fn test_staff_and_customer_are_disjoint() {
        assert!(has_permission(Role::WarehouseStaff, Permission::PrintLabels));
        assert!(!has_permission(Role::Customer, Permission::PrintLabels));
        assert!(!has_permission(Role::WarehouseStaff, Permission::ManageUsers));
        assert!(!has_permission(Role::WarehouseStaff, Permission::RequestShipment));
    }

    #[test]
    fn test_area_guards() {
        assert!(can_access(Some(Role::Customer), Area::Account));
        assert!(!can_access(Some(Role::Customer), Area::Warehouse));
        assert!(can_access(Some(Role::WarehouseStaff), Area::Warehouse));
        assert!(!can_access(Some(Role::WarehouseStaff), Area::Admin));
        assert!(can_access(Some(Role::Admin), Area::Admin));
        assert!(!can_access(None, Area::Account));
        assert!(!can_access(Role::parse("guest"), Area::Account));
    }

    #[test]
    fn test_role_serde_names() {
        assert_eq!(
            serde_json::to_string(&Role::WarehouseStaff).unwrap(),
            "\"warehouse_staff\""
        );
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }
}
