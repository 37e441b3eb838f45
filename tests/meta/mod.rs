mod oracle_mutations;
