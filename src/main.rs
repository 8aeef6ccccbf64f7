fn main() {
    pommel_cli::pommel_cli_entry();
}
