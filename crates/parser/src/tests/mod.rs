// Test module for parser
//
// Unit tests for the cell grammar, the grid reader and the readiness check.
