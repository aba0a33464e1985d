use vrcjournal_types::instance::markers;
use vrcjournal_types::InstanceType;

/// Classify a world instance by the access markers in its identifier.
///
/// Well-formed identifiers carry at most one marker combination, so the
/// ordered checks below never disagree with each other; an identifier with
/// no markers at all (including malformed input) is public. The group check
/// comes last because `~groupAccessType(...)` also matches `~group`.
pub fn classify_instance(world_id: &str) -> InstanceType {
    if world_id.contains(markers::HIDDEN) {
        return InstanceType::FriendPlus;
    }
    if world_id.contains(markers::FRIENDS) {
        return InstanceType::Friend;
    }
    if world_id.contains(markers::PRIVATE) {
        return if world_id.contains(markers::CAN_REQUEST_INVITE) {
            InstanceType::InvitePlus
        } else {
            InstanceType::Invite
        };
    }
    if world_id.contains(markers::GROUP) {
        if world_id.contains(markers::GROUP_MEMBERS) {
            return InstanceType::Group;
        }
        if world_id.contains(markers::GROUP_PLUS) {
            return InstanceType::GroupPlus;
        }
        if world_id.contains(markers::GROUP_PUBLIC) {
            return InstanceType::GroupPublic;
        }
    }
    InstanceType::Public
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_without_markers() {
        assert_eq!(classify_instance("wrld_x:1"), InstanceType::Public);
        assert_eq!(
            classify_instance("wrld_x:1~region(jp)"),
            InstanceType::Public
        );
    }

    #[test]
    fn test_private_with_and_without_invite_request() {
        assert_eq!(
            classify_instance("wrld_x:1~private(usr_a)~canRequestInvite"),
            InstanceType::InvitePlus
        );
        assert_eq!(
            classify_instance("wrld_x:1~private(usr_a)"),
            InstanceType::Invite
        );
    }

    #[test]
    fn test_friend_variants() {
        assert_eq!(
            classify_instance("wrld_x:1~hidden(usr_a)"),
            InstanceType::FriendPlus
        );
        assert_eq!(
            classify_instance("wrld_x:1~friends(usr_a)"),
            InstanceType::Friend
        );
    }

    #[test]
    fn test_group_access_types() {
        assert_eq!(
            classify_instance("wrld_x:1~group(grp_a)~groupAccessType(members)"),
            InstanceType::Group
        );
        assert_eq!(
            classify_instance("wrld_x:1~group(grp_a)~groupAccessType(plus)"),
            InstanceType::GroupPlus
        );
        assert_eq!(
            classify_instance("wrld_x:1~group(grp_a)~groupAccessType(public)"),
            InstanceType::GroupPublic
        );
    }

    #[test]
    fn test_group_without_access_type_falls_back_to_public() {
        assert_eq!(
            classify_instance("wrld_x:1~group(grp_a)"),
            InstanceType::Public
        );
    }

    #[test]
    fn test_empty_identifier_is_public() {
        assert_eq!(classify_instance(""), InstanceType::Public);
    }
}
