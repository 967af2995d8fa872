/// Generates an async handle method that forwards one event variant to an
/// actor's `tx` channel.
///
/// `handle_method!(UiEvent, kill, Kill)` for unit variants,
/// `handle_method!(UiEvent, select, Select { window_id: WindowId })` for struct variants.
#[macro_export]
macro_rules! handle_method {
    ($event:ident, $name:ident, $variant:ident) => {
        pub async fn $name(&self) -> $crate::error::Result<()> {
            self.tx.send($event::$variant).await?;
            Ok(())
        }
    };
    ($event:ident, $name:ident, $variant:ident { $($arg_name:ident: $arg_type:ty),* $(,)? }) => {
        pub async fn $name(&self, $($arg_name: $arg_type),*) -> $crate::error::Result<()> {
            self.tx.send($event::$variant { $($arg_name),* }).await?;
            Ok(())
        }
    };
}
