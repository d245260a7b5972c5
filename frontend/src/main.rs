fn main() {
    portal_frontend::run();
}
