use strum::EnumString;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Show,
    Hide,
    Toggle,
    ConfigReload,
}

/// Line commands accepted on the control socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, strum::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Command {
    Show,
    Hide,
    Toggle,
}

impl From<Command> for AppEvent {
    fn from(command: Command) -> Self {
        match command {
            Command::Show => AppEvent::Show,
            Command::Hide => AppEvent::Hide,
            Command::Toggle => AppEvent::Toggle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_parsing() {
        assert_eq!("show".parse::<Command>(), Ok(Command::Show));
        assert_eq!("HIDE".parse::<Command>(), Ok(Command::Hide));
        assert_eq!("Toggle".parse::<Command>(), Ok(Command::Toggle));
        assert!("reload".parse::<Command>().is_err());
    }

    #[test]
    fn test_command_round_trips_through_display() {
        assert_eq!(Command::Toggle.to_string(), "toggle");
        assert_eq!(AppEvent::from(Command::Show), AppEvent::Show);
    }
}
