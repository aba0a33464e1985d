use serde::{Deserialize, Serialize};
use std::fmt;

/// Markers embedded in encoded instance identifiers, e.g.
/// `wrld_xxx:12345~private(usr_yyy)~canRequestInvite~region(jp)`.
///
/// `~group(grp_xxx)` and `~groupAccessType(...)` share the `~group` prefix,
/// so anything matching on `GROUP` must rule out the other markers first.
pub mod markers {
    pub const HIDDEN: &str = "~hidden";
    pub const FRIENDS: &str = "~friends";
    pub const PRIVATE: &str = "~private";
    pub const GROUP: &str = "~group";
    pub const CAN_REQUEST_INVITE: &str = "~canRequestInvite";
    pub const GROUP_MEMBERS: &str = "~groupAccessType(members)";
    pub const GROUP_PLUS: &str = "~groupAccessType(plus)";
    pub const GROUP_PUBLIC: &str = "~groupAccessType(public)";
}

/// Access policy of a world instance, decoded from the markers embedded in
/// its identifier string. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstanceType {
    Public,
    FriendPlus,
    Friend,
    InvitePlus,
    Invite,
    Group,
    GroupPlus,
    GroupPublic,
}

impl InstanceType {
    /// All types, in the order the statistics views present them.
    pub const ALL: [InstanceType; 8] = [
        InstanceType::Public,
        InstanceType::FriendPlus,
        InstanceType::Friend,
        InstanceType::InvitePlus,
        InstanceType::Invite,
        InstanceType::Group,
        InstanceType::GroupPlus,
        InstanceType::GroupPublic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InstanceType::Public => "PUBLIC",
            InstanceType::FriendPlus => "FRIEND_PLUS",
            InstanceType::Friend => "FRIEND",
            InstanceType::InvitePlus => "INVITE_PLUS",
            InstanceType::Invite => "INVITE",
            InstanceType::Group => "GROUP",
            InstanceType::GroupPlus => "GROUP_PLUS",
            InstanceType::GroupPublic => "GROUP_PUBLIC",
        }
    }

    /// Parse the lowercase name used by the search filter language
    /// (`instanceType:friend_plus` etc). Unknown names return `None`.
    pub fn parse_name(name: &str) -> Option<Self> {
        match name {
            "public" => Some(InstanceType::Public),
            "friend_plus" => Some(InstanceType::FriendPlus),
            "friend" => Some(InstanceType::Friend),
            "invite_plus" => Some(InstanceType::InvitePlus),
            "invite" => Some(InstanceType::Invite),
            "group" => Some(InstanceType::Group),
            "group_plus" => Some(InstanceType::GroupPlus),
            "group_public" => Some(InstanceType::GroupPublic),
            _ => None,
        }
    }
}

impl fmt::Display for InstanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_accepts_filter_language_names() {
        assert_eq!(InstanceType::parse_name("public"), Some(InstanceType::Public));
        assert_eq!(
            InstanceType::parse_name("group_public"),
            Some(InstanceType::GroupPublic)
        );
        assert_eq!(InstanceType::parse_name("PUBLIC"), None);
        assert_eq!(InstanceType::parse_name("friends"), None);
    }

    #[test]
    fn test_display_matches_wire_names() {
        assert_eq!(InstanceType::FriendPlus.to_string(), "FRIEND_PLUS");
        assert_eq!(InstanceType::Public.to_string(), "PUBLIC");
    }
}
