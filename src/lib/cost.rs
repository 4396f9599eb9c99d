/// Average number of hours in a month.
pub const HOURS_PER_MONTH: f64 = 720.0;

/// Provider-averaged unit prices used for every savings estimate.
///
/// Built once at startup and passed explicitly to whatever needs it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostRates {
    pub cpu_hour: f64,
    pub memory_gb_hour: f64,
    pub storage_gb_month: f64,
    pub load_balancer_month: f64,
}

impl Default for CostRates {
    /// Averages of AWS, GCP and Azure general purpose pricing.
    fn default() -> Self {
        Self {
            cpu_hour: 0.035,           // ~$25/month per core
            memory_gb_hour: 0.004,     // ~$3/month per GB
            storage_gb_month: 0.10,    // block storage
            load_balancer_month: 180.0,
        }
    }
}

impl CostRates {
    /// Monthly cost of running one pod with the given requests.
    pub fn monthly_pod_cost(&self, cpu_cores: f64, memory_gb: f64) -> f64 {
        cpu_cores * self.cpu_hour * HOURS_PER_MONTH
            + memory_gb * self.memory_gb_hour * HOURS_PER_MONTH
    }

    /// Monthly savings from running `suggested` instead of `current` replicas.
    ///
    /// Rounded to whole dollars, halves away from zero.
    pub fn estimate_replica_savings(
        &self,
        current: i32,
        suggested: i32,
        cpu_cores: f64,
        memory_gb: f64,
    ) -> f64 {
        if current <= suggested {
            return 0.0;
        }

        let replicas_removed = f64::from(current - suggested);
        (self.monthly_pod_cost(cpu_cores, memory_gb) * replicas_removed).round()
    }

    /// Monthly savings from shrinking a volume from `current_gb` to `suggested_gb`.
    pub fn estimate_storage_savings(&self, current_gb: i64, suggested_gb: i64) -> f64 {
        if current_gb <= suggested_gb {
            return 0.0;
        }

        ((current_gb - suggested_gb) as f64 * self.storage_gb_month).round()
    }

    /// Monthly savings from deleting one unused LoadBalancer service.
    pub fn estimate_load_balancer_savings(&self) -> f64 {
        self.load_balancer_month
    }
}
