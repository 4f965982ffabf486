/// Sieve of Eratosthenes over `[0, n]`.
///
/// Returns every prime `p <= n` in ascending order. Composites are struck from
/// `2 * p` upwards; `n < 2` yields an empty list.
pub fn eratosthenes(n: u32) -> Vec<u32> {
    let mut primes = Vec::new();
    if n < 2 {
        return primes;
    }

    let n = n as usize;
    let mut is_prime = vec![true; n + 1];
    is_prime[0] = false;
    is_prime[1] = false;

    for i in 2..=n {
        if is_prime[i] {
            primes.push(i as u32);
            let mut j = i * 2;
            while j <= n {
                is_prime[j] = false;
                j += i;
            }
        }
    }
    primes
}
