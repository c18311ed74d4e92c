//! Access rules for the navigable areas of the app.

use crate::model::SessionUser;

/// A group of pages sharing one access rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    /// Home, about, login and sign-up.
    Public,
    /// Pages of a signed-in owner: pets, activities, appointments, dashboard.
    Member,
    /// The moderation pages.
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    SignInRequired,
    AdminRequired,
}

pub fn check_access(area: Area, user: Option<&SessionUser>) -> Access {
    match (area, user) {
        (Area::Public, _) => Access::Granted,
        (_, None) => Access::SignInRequired,
        (Area::Member, Some(_)) => Access::Granted,
        (Area::Admin, Some(user)) if user.is_admin() => Access::Granted,
        (Area::Admin, Some(_)) => Access::AdminRequired,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Role, Status};

    fn session(role: Role) -> SessionUser {
        SessionUser {
            uid: "u1".into(),
            email: "i@g.com".into(),
            display_name: "Ivy".into(),
            role,
            status: Status::Active,
        }
    }

    #[test]
    fn test_access_matrix() {
        let owner = session(Role::User);
        let admin = session(Role::Admin);

        assert_eq!(check_access(Area::Public, None), Access::Granted);
        assert_eq!(check_access(Area::Member, None), Access::SignInRequired);
        assert_eq!(check_access(Area::Admin, None), Access::SignInRequired);
        assert_eq!(check_access(Area::Member, Some(&owner)), Access::Granted);
        assert_eq!(check_access(Area::Admin, Some(&owner)), Access::AdminRequired);
        assert_eq!(check_access(Area::Admin, Some(&admin)), Access::Granted);
        assert_eq!(check_access(Area::Admin, Some(&session(Role::Vet))), Access::AdminRequired);
    }
}
