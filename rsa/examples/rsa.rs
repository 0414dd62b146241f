use num_bigint::{BigInt, Sign};
use rsa::PrivateKey;

fn main() {
    // The Mersenne primes 2^127 - 1 and 2^89 - 1.
    let p = (BigInt::from(1) << 127) - 1;
    let q = (BigInt::from(1) << 89) - 1;
    let private = PrivateKey::new(p, q).expect("key derivation");
    let public = private.public_key();

    let message = BigInt::from_bytes_be(Sign::Plus, b"attack at dawn");
    let ciphertext = public.encrypt(&message).expect("encrypt");
    let recovered = private.decrypt(&ciphertext).expect("decrypt");

    println!("modulus:    {}", public.n());
    println!("message:    {message}");
    println!("ciphertext: {ciphertext}");
    assert_eq!(recovered, message);

    let (_, bytes) = recovered.to_bytes_be();
    println!("recovered:  {}", String::from_utf8_lossy(&bytes));
}
