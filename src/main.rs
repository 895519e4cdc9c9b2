fn main() {
    spoken_chess::mock::run_interactive_terminal();
}
