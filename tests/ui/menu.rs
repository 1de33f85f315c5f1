use tvnav::input::Command;
use tvnav::ui::{Action, Menu};

#[test]
fn test_selection_is_clamped() {
    let menu = Menu::new(["Tasks", "Calendar", "Messages"]);
    assert_eq!(menu.selected(), 0);

    assert_eq!(menu.handle_command(Command::Up), None);
    assert_eq!(menu.selected(), 0);

    for _ in 0..5 {
        menu.handle_command(Command::Down);
    }
    assert_eq!(menu.selected(), 2);
    assert_eq!(menu.selected_entry(), Some("Messages".to_string()));
}

#[test]
fn test_select_and_right_produce_actions() {
    let menu = Menu::new(["Tasks", "Calendar"]);
    menu.handle_command(Command::Down);

    assert_eq!(menu.handle_command(Command::Select), Some(Action::OpenPopup("Calendar".to_string())));
    assert_eq!(menu.handle_command(Command::Right), Some(Action::OpenPage("calendar".to_string())));
    assert_eq!(menu.handle_command(Command::Back), None);
}

#[test]
fn test_empty_menu_ignores_commands() {
    let menu = Menu::new(Vec::<String>::new());
    assert_eq!(menu.handle_command(Command::Select), None);
    assert_eq!(menu.selected_entry(), None);
}
