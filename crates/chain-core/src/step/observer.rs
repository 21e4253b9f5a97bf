/// Hook de efecto lateral sobre el asentamiento del step A.
///
/// Recibe el valor ya coercionado (nunca un `Option`) y sólo por referencia:
/// no puede alterar lo que fluye hacia el step B.
pub trait SettlementObserver<T>: Send + Sync {
    fn on_settled(&self, value: &T);
}

impl<T, F> SettlementObserver<T> for F where F: Fn(&T) + Send + Sync
{
    fn on_settled(&self, value: &T) {
        self(value)
    }
}
