//! English translations (en-US)

use super::keys::Translations;

pub const TRANSLATIONS: Translations = Translations {
    about: "About",
    banner: " comes with ABSOLUTELY NO WARRANTY. This is free software, \
             and you are welcome to redistribute it under certain conditions.",
    exit: "Exit",
    file: "File",
    help: "Help",
    press_any_key: "Press any key to continue...",
    private_ip: "Private IP: ",
    public_ip: "Public IP: ",
    version: "Version",
    version_with_spaces: " version ",
    win_title: "IP addresses",
    wrong_arg: "Err: incorrect argument ",
    usage: "\
Usage: ipaddresses [option]

Shows the private and public IP addresses of this machine.

Options:
  (none)          print both addresses and exit
  -g, --gui       open the window
  -h, --help      show this help and exit
  -v, --version   show the version and exit

Window keys:
  F1              help
  Alt+F / Alt+H   File / Help menu
  Esc, q          close",

    resolution_failed: "unavailable (could not resolve the local host name)",
    network_failed: "unavailable (could not reach the address service)",
    timeout_failed: "unavailable (the address service did not answer in time)",
    upstream_failed: "unavailable (the address service returned an invalid answer)",
};
