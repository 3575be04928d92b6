use axum::http::Method;

use crate::types::Role;

/// Access requirement for a single route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// No token required.
    Public,
    /// Requires a valid token whose role appears in the list.
    Roles(&'static [Role]),
}

/// Roles allowed to mutate the resource tables.
const WRITERS: &[Role] = &[Role::Admin, Role::Manager];

/// The canonical route policy, consulted by the gate for every request.
/// Routes not listed here are public.
const ROUTE_POLICY: &[(Method, &str, Access)] = &[
    // Accounts
    (Method::POST, "/register", Access::Public),
    (Method::POST, "/login", Access::Public),
    // Manufacturers
    (Method::GET, "/manufacturers", Access::Public),
    (Method::POST, "/manufacturers", Access::Roles(WRITERS)),
    (Method::PUT, "/manufacturers/{id}", Access::Roles(WRITERS)),
    (Method::DELETE, "/manufacturers/{id}", Access::Roles(WRITERS)),
    // Branches
    (Method::GET, "/branches", Access::Public),
    (Method::POST, "/branches", Access::Roles(WRITERS)),
    (Method::PUT, "/branches/{location}", Access::Roles(WRITERS)),
    (Method::DELETE, "/branches/{location}", Access::Roles(WRITERS)),
    // Vehicles
    (Method::GET, "/vehicles", Access::Public),
    (Method::POST, "/vehicles", Access::Roles(WRITERS)),
    (Method::PUT, "/vehicles/{id}", Access::Roles(WRITERS)),
    (Method::DELETE, "/vehicles/{id}", Access::Roles(WRITERS)),
    // Inventory
    (Method::GET, "/inventory", Access::Public),
    (Method::POST, "/inventory", Access::Roles(WRITERS)),
    (Method::PUT, "/inventory/{id}", Access::Roles(WRITERS)),
    (Method::DELETE, "/inventory/{id}", Access::Roles(WRITERS)),
];

/// Looks up the access requirement for a method and matched route pattern.
#[must_use]
pub fn access_for(method: &Method, route: &str) -> Access {
    ROUTE_POLICY
        .iter()
        .find(|(m, r, _)| m == method && *r == route)
        .map_or(Access::Public, |(_, _, access)| *access)
}
