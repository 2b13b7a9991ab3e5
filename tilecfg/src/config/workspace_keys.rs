use super::{BaseCommand, Keybind};
use tilecfg_core::models::{Group, MODKEY_PLACEHOLDER};

/// Bindings to reach every group by its 1-based position.
///
/// For group `i`, `modkey + i` shows it and `modkey + shift + i` sends the focused window to
/// it. The two bindings of a group are adjacent and follow the order of `groups`.
pub fn group_bindings(groups: &[Group]) -> Vec<Keybind> {
    groups
        .iter()
        .enumerate()
        .flat_map(|(i, group)| {
            let key = (i + 1).to_string();
            vec![
                Keybind::new(&[MODKEY_PLACEHOLDER], &key, BaseCommand::GroupToScreen)
                    .value(group.name.clone())
                    .desc(format!("Switch to group {}", group.label())),
                Keybind::new(&[MODKEY_PLACEHOLDER, "shift"], &key, BaseCommand::WindowToGroup)
                    .value(group.name.clone())
                    .desc(format!("Move focused window to group {}", group.label())),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups() -> Vec<Group> {
        ["www", "dev", "chat", "music"]
            .iter()
            .map(|name| Group::new(*name))
            .collect()
    }

    #[test]
    fn two_bindings_per_group() {
        assert_eq!(group_bindings(&groups()).len(), 2 * groups().len());
        assert!(group_bindings(&[]).is_empty());
    }

    #[test]
    fn switch_and_send_address_same_group() {
        let groups = groups();
        let bindings = group_bindings(&groups);
        for (i, group) in groups.iter().enumerate() {
            let switch = &bindings[2 * i];
            let send = &bindings[2 * i + 1];
            assert_eq!(switch.command, BaseCommand::GroupToScreen);
            assert_eq!(send.command, BaseCommand::WindowToGroup);
            assert_eq!(switch.value, group.name);
            assert_eq!(send.value, group.name);
            assert_eq!(switch.key, (i + 1).to_string());
            assert_eq!(send.key, switch.key);
        }
    }

    #[test]
    fn send_uses_shift() {
        let bindings = group_bindings(&groups());
        let modifier: Vec<String> = bindings[1].modifier.clone().unwrap().into();
        assert_eq!(modifier, vec!["modkey".to_owned(), "shift".to_owned()]);
    }
}
