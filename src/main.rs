#[tokio::main]
async fn main() {
    canchas_backend::run().await;
}
